use crate::error::{Result, StockroomError};

/// Field separator for the persisted line format.
pub const DELIMITER: char = ',';

/// A single inventory entry.
///
/// Items are immutable once constructed; updates go through
/// [`Inventory::replace`](crate::inventory::Inventory::replace) with a
/// freshly parsed item. Equality covers all five fields, while sorting and
/// searching compare on `id` alone (see [`crate::sort`] and
/// [`crate::search`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub quantity: i64,
    pub name: String,
    pub location: String,
    pub description: String,
}

impl Item {
    /// Build an item from five raw text fields.
    ///
    /// `id` and `quantity` must parse as integers and `id` must not be
    /// negative. The text fields are scrubbed of embedded delimiters so a
    /// rendered line always splits back into exactly five fields.
    pub fn parse(
        id: &str,
        quantity: &str,
        name: &str,
        location: &str,
        description: &str,
    ) -> Result<Self> {
        let id = parse_number(id, "Item number")?;
        let quantity = parse_number(quantity, "Quantity")?;

        if id < 0 {
            return Err(StockroomError::NegativeId);
        }

        Ok(Self {
            id,
            quantity,
            name: sanitize(name),
            location: sanitize(location),
            description: sanitize(description),
        })
    }

    /// The canonical persisted form: `id,quantity,name,location,description`.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.id, self.quantity, self.name, self.location, self.description
        )
    }

    /// The same fields joined with ` | ` for terminal display. Never used
    /// for persistence.
    pub fn display_row(&self) -> String {
        self.to_line().replace(DELIMITER, " | ")
    }
}

fn parse_number(raw: &str, field: &'static str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| StockroomError::InvalidNumber { field })
}

fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| *c != DELIMITER).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_fields() {
        let item = Item::parse("7", "12", "Bolt", "A1", "steel").unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.quantity, 12);
        assert_eq!(item.name, "Bolt");
        assert_eq!(item.location, "A1");
        assert_eq!(item.description, "steel");
    }

    #[test]
    fn rejects_non_numeric_id() {
        match Item::parse("seven", "1", "Bolt", "A1", "steel") {
            Err(StockroomError::InvalidNumber { field }) => assert_eq!(field, "Item number"),
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn rejects_non_numeric_quantity() {
        match Item::parse("7", "lots", "Bolt", "A1", "steel") {
            Err(StockroomError::InvalidNumber { field }) => assert_eq!(field, "Quantity"),
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn rejects_negative_id() {
        assert!(matches!(
            Item::parse("-3", "1", "Bolt", "A1", "steel"),
            Err(StockroomError::NegativeId)
        ));
    }

    #[test]
    fn allows_negative_quantity() {
        let item = Item::parse("3", "-5", "Bolt", "A1", "backordered").unwrap();
        assert_eq!(item.quantity, -5);
    }

    #[test]
    fn strips_delimiters_from_text_fields() {
        let item = Item::parse("1", "1", "Acme, Inc", "Aisle 2, Bin 3", "a,b,c").unwrap();
        assert_eq!(item.name, "Acme Inc");
        assert_eq!(item.location, "Aisle 2 Bin 3");
        assert_eq!(item.description, "abc");
    }

    #[test]
    fn renders_canonical_line() {
        let item = Item::parse("5", "1", "Widget", "Shelf", "ok").unwrap();
        assert_eq!(item.to_line(), "5,1,Widget,Shelf,ok");
    }

    #[test]
    fn display_row_uses_visual_separator() {
        let item = Item::parse("5", "1", "Widget", "Shelf", "ok").unwrap();
        assert_eq!(item.display_row(), "5 | 1 | Widget | Shelf | ok");
    }

    #[test]
    fn equality_covers_all_fields() {
        let a = Item::parse("5", "1", "Widget", "Shelf", "ok").unwrap();
        let b = Item::parse("5", "1", "Widget", "Shelf", "ok").unwrap();
        let c = Item::parse("5", "2", "Widget", "Shelf", "ok").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn parse_accepts_surrounding_whitespace_on_numbers() {
        let item = Item::parse(" 5 ", " 1 ", "Widget", "Shelf", "ok").unwrap();
        assert_eq!(item.id, 5);
        assert_eq!(item.quantity, 1);
    }
}
