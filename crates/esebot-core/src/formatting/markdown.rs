//! Legacy Markdown entities.
//!
//! Inside an entity, Telegram reads everything up to the entity's closing
//! character and honours no escapes, so that character is swapped for a
//! lookalike. Outside entities, the markup characters are backslash-escaped.

const MARKUP_CHARACTERS: [char; 4] = ['_', '*', '`', '['];

pub(crate) fn bold(text: &str) -> String {
    format!("*{}*", text.replace('*', "∗"))
}

pub(crate) fn italic(text: &str) -> String {
    format!("_{}_", text.replace('_', "＿"))
}

pub(crate) fn link(text: &str, url: &str) -> String {
    format!("[{}]({})", text.replace(']', "］"), url.replace(')', "%29"))
}

pub(crate) fn plain(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKUP_CHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}
