use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::patrons::Patron;
use crate::patrons::domain::model::PatronEntity;

// PatronDto is a read-only snapshot of a library member.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronDto {
    pub patron_id: String,
    pub name: String,
    pub checked_out_items: Vec<String>,
    pub fine_amount: f64,
}

impl From<&PatronEntity> for PatronDto {
    fn from(other: &PatronEntity) -> Self {
        Self {
            patron_id: other.patron_id.to_string(),
            name: other.name.to_string(),
            checked_out_items: other.checked_out_items.clone(),
            fine_amount: other.fine_amount,
        }
    }
}

impl Identifiable for PatronDto {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}

impl Patron for PatronDto {
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
    use crate::patrons::Patron;
    use crate::patrons::domain::model::PatronEntity;
    use crate::patrons::dto::PatronDto;

    #[test]
    fn test_should_snapshot_patron() {
        let mut patron = PatronEntity::new("P1", "Ada");
        patron.add_item("B1");
        patron.amend_fine(0.3);
        let dto = PatronDto::from(&patron);
        assert_eq!("Ada", dto.name());
        assert!(dto.has_checked_out("B1"));
        assert_eq!(0.3, dto.fine_amount());
    }
}
