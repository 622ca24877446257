use crate::domain::{Birthday, Name, Phone};
use crate::error::CoreError;
use chrono::NaiveDate;
use std::fmt;

/// One contact: a name, its phones in insertion order, and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn with_parts(name: Name, phones: Vec<Phone>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn has_phone(&self, phone: &Phone) -> bool {
        self.phones.contains(phone)
    }

    /// Appends without checking for duplicates.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    pub fn remove_phone(&mut self, phone: &Phone) -> Result<Phone, CoreError> {
        let index = self.position_of(phone)?;
        Ok(self.phones.remove(index))
    }

    pub fn replace_phone(&mut self, old: &Phone, new: Phone) -> Result<Phone, CoreError> {
        let index = self.position_of(old)?;
        Ok(std::mem::replace(&mut self.phones[index], new))
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// `None` when no birthday is set.
    pub fn days_until_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|birthday| birthday.days_until(today))
    }

    pub fn phones_line(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Line shown by `show all` and search results.
    pub fn summary(&self, today: NaiveDate) -> String {
        let countdown = match (self.birthday, self.days_until_birthday(today)) {
            (Some(birthday), Some(days)) => format!(
                "{} {} {} left until {}'s birthday",
                birthday,
                days,
                if days == 1 { "day" } else { "days" },
                self.name
            ),
            _ => format!("The birthday of the contact {} is not set", self.name),
        };
        let phones = self.phones_line();
        if phones.is_empty() {
            format!("{}: {}", self.name, countdown)
        } else {
            format!("{}: {} {}", self.name, phones, countdown)
        }
    }

    fn position_of(&self, phone: &Phone) -> Result<usize, CoreError> {
        self.phones
            .iter()
            .position(|candidate| candidate == phone)
            .ok_or_else(|| CoreError::PhoneNotFound(phone.to_string()))
    }
}

/// Searchable form: `Name, phones, DD Month`.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.phones_line())?;
        if let Some(birthday) = self.birthday {
            write!(f, ", {}", birthday)?;
        }
        Ok(())
    }
}
