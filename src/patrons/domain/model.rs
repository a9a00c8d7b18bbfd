use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::patrons::Patron;

// PatronEntity abstracts a library member. Borrowed items are held as item ids.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronEntity {
    pub(crate) patron_id: String,
    pub(crate) name: String,
    pub(crate) checked_out_items: Vec<String>,
    // May go negative after an overpayment.
    pub(crate) fine_amount: f64,
}

impl PatronEntity {
    pub fn new(patron_id: &str, name: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
            checked_out_items: vec![],
            fine_amount: 0.0,
        }
    }

    pub(crate) fn add_item(&mut self, item_id: &str) {
        self.checked_out_items.push(item_id.to_string());
    }

    // Returns false when the item was not in the borrowed set.
    pub(crate) fn remove_item(&mut self, item_id: &str) -> bool {
        match self.checked_out_items.iter().position(|id| id == item_id) {
            Some(pos) => {
                self.checked_out_items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn amend_fine(&mut self, amount: f64) {
        self.fine_amount += amount;
    }
}

impl Identifiable for PatronEntity {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}

impl Patron for PatronEntity {
    fn name(&self) -> &str {
        &self.name
    }

    fn fine_amount(&self) -> f64 {
        self.fine_amount
    }

    fn checked_out_items(&self) -> &[String] {
        &self.checked_out_items
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::patrons::Patron;
    use crate::patrons::domain::model::PatronEntity;

    #[test]
    fn test_should_build_patron() {
        let patron = PatronEntity::new("P1", "Ada");
        assert_eq!("P1", patron.id().as_str());
        assert_eq!("Ada", patron.name());
        assert!(patron.checked_out_items().is_empty());
        assert_eq!(0.0, patron.fine_amount());
    }

    #[test]
    fn test_should_add_and_remove_items() {
        let mut patron = PatronEntity::new("P1", "Ada");
        patron.add_item("B1");
        patron.add_item("M1");
        assert!(patron.has_checked_out("B1"));
        assert!(patron.remove_item("B1"));
        assert!(!patron.has_checked_out("B1"));
        assert_eq!(vec!["M1".to_string()], patron.checked_out_items().to_vec());
    }

    #[test]
    fn test_should_ignore_removing_absent_item() {
        let mut patron = PatronEntity::new("P1", "Ada");
        patron.add_item("M1");
        assert!(!patron.remove_item("B1"));
        assert_eq!(1, patron.checked_out_items().len());
    }

    #[test]
    fn test_should_amend_fine_below_zero() {
        let mut patron = PatronEntity::new("P1", "Ada");
        patron.amend_fine(0.5);
        assert_eq!(0.5, patron.fine_amount());
        patron.amend_fine(-2.0);
        assert_eq!(-1.5, patron.fine_amount());
    }
}
