//! Rendering of entries and listings.
//!
//! The presenter is a thin consumer of the domain model: it only reads the
//! fields the document exposes and imposes no formatting on the data itself.

use nudge::{Document, Entry, Item};
use serde_json::json;

use super::terminal::{Style, is_narrow};

/// Prints the suggestion view for a single entry.
pub fn entry_pretty(note_title: &str, entry: &Entry, style: &Style) {
    println!(
        "{}\n",
        style.accent(&format!("Today's {note_title} suggestion"))
    );

    print_item(&entry.parent, style, "");

    if !entry.children.is_empty() {
        println!("\n{}", style.dim("Sub-items"));
        for (index, child) in entry.children.iter().enumerate() {
            print_numbered(child, index + 1, style);
        }
    }
}

/// Prints the full listing of every entry in the document.
pub fn list_pretty(document: &Document, style: &Style) {
    println!(
        "{}\n",
        style.accent(&format!("{} - all entries", document.title()))
    );

    if document.is_empty() {
        println!("{}", style.err("No entries found."));
        return;
    }

    for (index, entry) in document.entries().iter().enumerate() {
        println!(
            "{}. {} {}",
            index + 1,
            style.status(entry.parent.completed),
            entry.parent.label()
        );
        if let Some(url) = entry.parent.url() {
            print_url(url, style, "   ");
        }

        for (child_index, child) in entry.children.iter().enumerate() {
            println!(
                "   {}) {} {}",
                child_index + 1,
                style.status(child.completed),
                child.label()
            );
            if let Some(url) = child.url() {
                print_url(url, style, "      ");
            }
        }

        println!();
    }
}

fn print_item(item: &Item, style: &Style, indent: &str) {
    println!(
        "{indent}{} {}",
        style.status(item.completed),
        item.label()
    );
    if let Some(url) = item.url() {
        print_url(url, style, indent);
    }
}

fn print_numbered(item: &Item, number: usize, style: &Style) {
    println!(
        "  {number}. {} {}",
        style.status(item.completed),
        item.label()
    );
    if let Some(url) = item.url() {
        print_url(url, style, "     ");
    }
}

/// Link lines hang under their item; narrow terminals drop the hang so the
/// URL gets the whole row.
fn print_url(url: &str, style: &Style, indent: &str) {
    let indent = if is_narrow() { "" } else { indent };
    println!("{indent}{}", style.link(&format!("link: {url}")));
}

/// The JSON payload for a single item.
fn item_json(item: &Item) -> serde_json::Value {
    json!({
        "text": item.text,
        "title": item.link.as_ref().map(|link| &link.title),
        "url": item.link.as_ref().map(|link| &link.url),
        "completed": item.completed,
    })
}

/// The JSON payload for an entry: its parent plus all children.
pub fn entry_json(entry: &Entry) -> serde_json::Value {
    let children: Vec<_> = entry.children.iter().map(item_json).collect();
    json!({
        "parent": item_json(&entry.parent),
        "children": children,
    })
}

/// The JSON payload for a whole document.
pub fn document_json(document: &Document) -> serde_json::Value {
    let entries: Vec<_> = document.entries().iter().map(entry_json).collect();
    json!({
        "title": document.title(),
        "entries": entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linked_entry() -> Entry {
        Entry {
            parent: Item::new("Read [Design Doc](https://example.com/doc)", false),
            children: vec![Item::new("plain child", true)],
        }
    }

    #[test]
    fn item_json_carries_link_fields_together() {
        let payload = item_json(&linked_entry().parent);

        assert_eq!(payload["text"], "Read [Design Doc](https://example.com/doc)");
        assert_eq!(payload["title"], "Design Doc");
        assert_eq!(payload["url"], "https://example.com/doc");
        assert_eq!(payload["completed"], false);
    }

    #[test]
    fn item_json_uses_null_for_missing_links() {
        let payload = item_json(&Item::new("no link here", true));

        assert_eq!(payload["title"], serde_json::Value::Null);
        assert_eq!(payload["url"], serde_json::Value::Null);
        assert_eq!(payload["completed"], true);
    }

    #[test]
    fn entry_json_nests_children() {
        let payload = entry_json(&linked_entry());

        assert_eq!(payload["parent"]["title"], "Design Doc");
        assert_eq!(payload["children"].as_array().unwrap().len(), 1);
        assert_eq!(payload["children"][0]["text"], "plain child");
    }

    #[test]
    fn document_json_includes_title_and_all_entries() {
        let document = Document::new(
            "todo".to_string(),
            vec![linked_entry(), linked_entry()],
        );
        let payload = document_json(&document);

        assert_eq!(payload["title"], "todo");
        assert_eq!(payload["entries"].as_array().unwrap().len(), 2);
    }
}
