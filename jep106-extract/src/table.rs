//! Bank partitioning
//!
//! Groups scanned rows into banks: a row with marker `1` opens the next bank,
//! every other row is appended to the bank currently open.

use crate::types::{Bank, ManufacturerTable, RawRecord};

impl ManufacturerTable {
    /// Build the banked table from scanned rows, preserving document order
    pub fn from_records(records: &[RawRecord]) -> Self {
        let mut table = ManufacturerTable::new();

        for record in records {
            let id = record.id;

            if record.starts_bank() {
                let number = table.banks.len() as u32 + 1;
                log::debug!("Bank {} starts with 0x{:02X} {:?}", number, id, record.name);
                table.banks.push(Bank::new(number));
            }

            match table.banks.last_mut() {
                Some(bank) => bank.entries.push((id, record.name.clone())),
                None => {
                    log::warn!(
                        "Row 0x{:02X} {:?} appears before the first bank marker",
                        id,
                        record.name
                    );
                    table.orphans.push((id, record.name.clone()));
                }
            }
        }

        table
    }
}

/// Build the banked table from scanned rows
pub fn build_table(records: &[RawRecord]) -> ManufacturerTable {
    let table = ManufacturerTable::from_records(records);

    log::info!(
        "Built manufacturer table: {} banks, {} entries",
        table.banks.len(),
        table.entry_count()
    );

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(markers: &[&str]) -> Vec<RawRecord> {
        markers
            .iter()
            .enumerate()
            .map(|(i, marker)| RawRecord::new(*marker, format!("Vendor {}", i), i as u8 + 1))
            .collect()
    }

    #[test]
    fn test_single_bank() {
        let input = vec![
            RawRecord::new("1", "Acme Corp", 0x01),
            RawRecord::new("2", "Beta Inc", 0x02),
        ];
        let table = build_table(&input);

        assert_eq!(table.banks.len(), 1);
        assert_eq!(table.banks[0].number, 1);
        assert_eq!(
            table.banks[0].entries,
            vec![(0x01, "Acme Corp".to_string()), (0x02, "Beta Inc".to_string())]
        );
    }

    #[test]
    fn test_bank_numbering() {
        let table = build_table(&records(&["1", "2", "2", "1", "2"]));

        assert_eq!(table.banks.len(), 2);
        assert_eq!(table.banks[0].number, 1);
        assert_eq!(table.banks[0].len(), 3);
        assert_eq!(table.banks[1].number, 2);
        assert_eq!(table.banks[1].len(), 2);
        assert_eq!(table.banks[1].entries[0], (0x04, "Vendor 3".to_string()));
    }

    #[test]
    fn test_rows_before_first_bank_are_orphans() {
        let table = build_table(&records(&["2", "1", "2"]));

        assert_eq!(table.orphans, vec![(0x01, "Vendor 0".to_string())]);
        assert_eq!(table.banks.len(), 1);
        assert_eq!(table.entry_count(), 3);
    }

    #[test]
    fn test_empty_input() {
        let table = build_table(&[]);
        assert!(table.is_empty());
        assert!(table.banks.is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let input = vec![
            RawRecord::new("1", "First", 0x01),
            RawRecord::new("2", "Second", 0x01),
        ];
        let table = build_table(&input);
        assert_eq!(
            table.banks[0].entries,
            vec![(0x01, "First".to_string()), (0x01, "Second".to_string())]
        );
    }
}
