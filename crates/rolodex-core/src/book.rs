use crate::domain::{Name, Record};
use crate::search::SearchQuery;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Backend that can hold a whole address book snapshot.
pub trait Storage {
    type Error;

    /// `Ok(None)` when nothing has been saved yet.
    fn read_records(&self) -> Result<Option<Vec<Record>>, Self::Error>;

    /// Replaces everything previously written.
    fn write_records(&self, records: &[Record]) -> Result<(), Self::Error>;
}

/// Records keyed by normalized name, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record`, replacing one with the same name in its existing slot.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.records[slot], record)),
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, name: &Name) -> Option<&Record> {
        self.index
            .get(name.as_str())
            .map(|&slot| &self.records[slot])
    }

    pub fn get_mut(&mut self, name: &Name) -> Option<&mut Record> {
        self.index
            .get(name.as_str())
            .map(|&slot| &mut self.records[slot])
    }

    pub fn contains(&self, name: &Name) -> bool {
        self.index.contains_key(name.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter()
    }

    /// Summary lines for every record. Call again to restart.
    pub fn summaries(&self, today: NaiveDate) -> impl Iterator<Item = String> + '_ {
        self.records.iter().map(move |record| record.summary(today))
    }

    /// Summary lines of records whose searchable form matches `query`.
    pub fn search<'a>(
        &'a self,
        query: &'a SearchQuery,
        today: NaiveDate,
    ) -> impl Iterator<Item = String> + 'a {
        self.records
            .iter()
            .filter(move |record| query.matches(&record.to_string()))
            .map(move |record| record.summary(today))
    }

    pub fn load_from<S: Storage>(&mut self, storage: &S) -> Result<(), S::Error> {
        if let Some(records) = storage.read_records()? {
            let mut book = AddressBook::new();
            for record in records {
                book.add_record(record);
            }
            *self = book;
        }
        Ok(())
    }

    pub fn save_to<S: Storage>(&self, storage: &S) -> Result<(), S::Error> {
        storage.write_records(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::{AddressBook, Storage};
    use crate::domain::{Birthday, Name, Phone, Record};
    use crate::search::SearchQuery;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::convert::Infallible;

    #[derive(Default)]
    struct MemoryStorage {
        saved: RefCell<Option<Vec<Record>>>,
    }

    impl Storage for MemoryStorage {
        type Error = Infallible;

        fn read_records(&self) -> Result<Option<Vec<Record>>, Self::Error> {
            Ok(self.saved.borrow().clone())
        }

        fn write_records(&self, records: &[Record]) -> Result<(), Self::Error> {
            *self.saved.borrow_mut() = Some(records.to_vec());
            Ok(())
        }
    }

    fn record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
        Record::with_parts(
            Name::parse(name).expect("name"),
            phones
                .iter()
                .map(|raw| Phone::parse(raw).expect("phone"))
                .collect(),
            birthday.map(|raw| Birthday::parse(raw).expect("birthday")),
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 30).unwrap()
    }

    #[test]
    fn add_record_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("ada", &["111"], None));
        book.add_record(record("bob", &["222"], None));
        let previous = book.add_record(record("ADA", &["333"], None));

        assert_eq!(previous.map(|r| r.phones_line()), Some("111".to_string()));
        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Ada", "Bob"]);
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn lookup_by_normalized_name() {
        let mut book = AddressBook::new();
        book.add_record(record("john smith", &["111"], None));
        let key = Name::parse("JOHN   SMITH").expect("name");
        assert!(book.contains(&key));
        assert_eq!(book.get(&key).map(|r| r.phones_line()).as_deref(), Some("111"));
        assert!(book.get(&Name::parse("jane").expect("name")).is_none());
    }

    #[test]
    fn summaries_are_restartable() {
        let mut book = AddressBook::new();
        book.add_record(record("ada", &["111"], Some("0105")));
        book.add_record(record("bob", &["222"], None));

        let first: Vec<String> = book.summaries(today()).collect();
        let second: Vec<String> = book.summaries(today()).collect();
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                "Ada: 111 01 May 1 day left until Ada's birthday".to_string(),
                "Bob: 222 The birthday of the contact Bob is not set".to_string(),
            ]
        );
    }

    #[test]
    fn search_matches_lowercased_representation() {
        let mut book = AddressBook::new();
        book.add_record(record("ada", &["4155551212"], Some("0105")));
        book.add_record(record("bob", &["222"], None));

        let query = SearchQuery::parse("MAY").expect("query");
        let hits: Vec<String> = book.search(&query, today()).collect();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].starts_with("Ada:"));

        let query = SearchQuery::parse("zzz").expect("query");
        assert_eq!(book.search(&query, today()).count(), 0);
    }

    #[test]
    fn save_then_load_round_trips() {
        let storage = MemoryStorage::default();
        let mut book = AddressBook::new();
        book.add_record(record("zed", &["111", "222"], Some("2902")));
        book.add_record(record("ada", &[], None));
        book.save_to(&storage).expect("save");

        let mut loaded = AddressBook::new();
        loaded.add_record(record("stale", &["999"], None));
        loaded.load_from(&storage).expect("load");
        assert_eq!(loaded, book);
    }

    #[test]
    fn load_without_snapshot_keeps_book() {
        let storage = MemoryStorage::default();
        let mut book = AddressBook::new();
        book.add_record(record("ada", &["111"], None));
        book.load_from(&storage).expect("load");
        assert_eq!(book.len(), 1);
    }
}
