use crate::commands::{split_args, CommandError, CommandResult, Context};
use rolodex_core::domain::{Birthday, Name, Phone, Record};

fn missing_contact(name: &Name) -> String {
    format!("Contact {} does not exist", name)
}

/// `add <name> <phone> [birthday]`
pub fn add_contact(ctx: &mut Context<'_>, args: &str) -> CommandResult {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    let (name, phone, birthday) = match tokens.as_slice() {
        &[name, phone] => (name, phone, None),
        &[name, phone, birthday] => (name, phone, Some(birthday)),
        _ => {
            return Err(CommandError::Arity {
                expected: "2 or 3",
                got: tokens.len(),
            })
        }
    };
    let name = Name::parse(name)?;
    let phone = Phone::parse(phone)?;

    if let Some(record) = ctx.book.get_mut(&name) {
        if record.has_phone(&phone) {
            return Ok(format!("{} already exists in contact {}", phone, name));
        }
        let reply = format!("{} successfully added to contact {}", phone, name);
        record.add_phone(phone);
        return Ok(reply);
    }

    let birthday = birthday.map(Birthday::parse).transpose()?;
    let mut record = Record::new(name.clone());
    record.add_phone(phone);
    if let Some(birthday) = birthday {
        record.set_birthday(birthday);
    }
    ctx.book.add_record(record);
    Ok(format!("Contact {} has been added", name))
}

/// `change <name> <old phone> <new phone>`
pub fn change_phone(ctx: &mut Context<'_>, args: &str) -> CommandResult {
    let [name, old, new] = split_args::<3>(args)?;
    let name = Name::parse(name)?;
    let old = Phone::parse(old)?;
    let new = Phone::parse(new)?;

    let Some(record) = ctx.book.get_mut(&name) else {
        return Ok(missing_contact(&name));
    };
    let reply = format!("{} has been changed to {} for contact {}", old, new, name);
    record.replace_phone(&old, new)?;
    Ok(reply)
}

/// `delete <name> <phone>`
pub fn delete_phone(ctx: &mut Context<'_>, args: &str) -> CommandResult {
    let [name, phone] = split_args::<2>(args)?;
    let name = Name::parse(name)?;
    let phone = Phone::parse(phone)?;

    let Some(record) = ctx.book.get_mut(&name) else {
        return Ok(missing_contact(&name));
    };
    record.remove_phone(&phone)?;
    Ok(format!("{} has been deleted from contact {}", phone, name))
}

/// `phone <name>`
pub fn show_phone(ctx: &mut Context<'_>, args: &str) -> CommandResult {
    let name = Name::parse(args)?;
    match ctx.book.get(&name) {
        Some(record) => Ok(format!("{}: {}", record.name(), record.phones_line())
            .trim_end()
            .to_string()),
        None => Ok(missing_contact(&name)),
    }
}
