use crate::error::Result;
use rolodex_core::domain::{Birthday, Name, Phone, Record};
use rusqlite::{params, Connection};
use std::collections::HashMap;

pub struct ContactsRepo<'a> {
    conn: &'a Connection,
}

struct ContactRow {
    position: i64,
    name: String,
    birthday_month: Option<u8>,
    birthday_day: Option<u8>,
}

impl<'a> ContactsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Every stored record in saved order, re-validated on the way out.
    pub fn list_all(&self) -> Result<Vec<Record>> {
        let mut phones = self.phones_by_contact()?;

        let mut stmt = self.conn.prepare(
            "SELECT position, name, birthday_month, birthday_day
             FROM contacts
             ORDER BY position ASC;",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(ContactRow {
                position: row.get(0)?,
                name: row.get(1)?,
                birthday_month: row.get(2)?,
                birthday_day: row.get(3)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            let row = row?;
            let birthday = match (row.birthday_month, row.birthday_day) {
                (Some(month), Some(day)) => Some(Birthday::from_month_day(month, day)?),
                _ => None,
            };
            records.push(Record::with_parts(
                Name::parse(&row.name)?,
                phones.remove(&row.position).unwrap_or_default(),
                birthday,
            ));
        }
        Ok(records)
    }

    /// Drops everything stored and writes `records` in order, atomically.
    pub fn replace_all(&self, records: &[Record]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM phones;", [])?;
        tx.execute("DELETE FROM contacts;", [])?;
        {
            let mut insert_contact = tx.prepare(
                "INSERT INTO contacts (position, name, birthday_month, birthday_day)
                 VALUES (?1, ?2, ?3, ?4);",
            )?;
            let mut insert_phone = tx.prepare(
                "INSERT INTO phones (contact_position, ordinal, digits) VALUES (?1, ?2, ?3);",
            )?;
            for (position, record) in records.iter().enumerate() {
                let position = position as i64;
                let birthday = record.birthday();
                insert_contact.execute(params![
                    position,
                    record.name().as_str(),
                    birthday.map(|b| b.month()),
                    birthday.map(|b| b.day()),
                ])?;
                for (ordinal, phone) in record.phones().iter().enumerate() {
                    insert_phone.execute(params![position, ordinal as i64, phone.as_str()])?;
                }
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn phones_by_contact(&self) -> Result<HashMap<i64, Vec<Phone>>> {
        let mut stmt = self.conn.prepare(
            "SELECT contact_position, digits
             FROM phones
             ORDER BY contact_position ASC, ordinal ASC;",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut out: HashMap<i64, Vec<Phone>> = HashMap::new();
        for row in rows {
            let (position, digits) = row?;
            out.entry(position).or_default().push(Phone::parse(&digits)?);
        }
        Ok(out)
    }
}
