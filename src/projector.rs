use serde_json::Value;

use crate::data_models::{BookRecord, SearchResult};

/// Location of the book list inside the Next.js page state.
pub const BOOKS_POINTER: &str = "/props/pageProps/searchResult/data/books";

/// The book entries of a payload, or nothing when any step of the path is
/// missing or is not the expected type.
pub fn find_books(payload: &Value) -> &[Value] {
    payload
        .pointer(BOOKS_POINTER)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

pub fn project_book(entry: &Value) -> BookRecord {
    let field = |name: &str| entry.get(name).cloned();
    BookRecord {
        id: field("id"),
        title: field("title"),
        description: field("description"),
        level: field("level"),
        kind: field("type"),
        file: field("file"),
        cover: field("cover"),
        created_at: field("created_at"),
    }
}

pub fn project(payload: &Value) -> SearchResult {
    let books = find_books(payload).iter().map(project_book).collect();
    SearchResult::from_books(books)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload_with(books: Value) -> Value {
        json!({
            "props": {"pageProps": {"searchResult": {"data": {"books": books}}}}
        })
    }

    #[test]
    fn test_missing_intermediate_keys_yield_empty() {
        let payloads = [
            json!({}),
            json!({"props": {}}),
            json!({"props": {"pageProps": {}}}),
            json!({"props": {"pageProps": {"searchResult": null}}}),
            json!({"props": {"pageProps": {"searchResult": {"data": {}}}}}),
            json!({"props": {"pageProps": {"searchResult": {"data": {"books": "nope"}}}}}),
            json!([1, 2, 3]),
            json!(null),
        ];
        for payload in payloads {
            assert!(find_books(&payload).is_empty(), "{payload}");
            assert_eq!(project(&payload).count, 0);
        }
    }

    #[test]
    fn test_projects_exactly_eight_fields() {
        let entry = json!({
            "id": 7,
            "title": "Xamsa",
            "description": "Besh doston",
            "level": "adult",
            "type": "book",
            "file": "xamsa.pdf",
            "cover": "xamsa.jpg",
            "created_at": "2021-03-01T10:00:00Z",
            "author_id": 12,
            "views": 1000
        });
        let record = project_book(&entry);
        let out = serde_json::to_value(&record).unwrap();
        let keys: Vec<&str> = out.as_object().unwrap().keys().map(String::as_str).collect();

        assert_eq!(keys.len(), 8);
        for key in ["id", "title", "description", "level", "type", "file", "cover", "created_at"] {
            assert_eq!(out[key], entry[key], "field {key}");
        }
        assert!(out.get("views").is_none());
    }

    #[test]
    fn test_values_pass_through_without_coercion() {
        let entry = json!({"id": "42", "level": 3, "cover": null, "file": {"url": "x"}});
        let record = project_book(&entry);
        assert_eq!(record.id, Some(json!("42")));
        assert_eq!(record.level, Some(json!(3)));
        assert_eq!(record.cover, Some(Value::Null));
        assert_eq!(record.file, Some(json!({"url": "x"})));
        assert_eq!(record.title, None);
    }

    #[test]
    fn test_missing_fields_are_omitted_on_output() {
        let record = project_book(&json!({"id": 1}));
        assert_eq!(serde_json::to_value(&record).unwrap(), json!({"id": 1}));
    }

    #[test]
    fn test_non_object_entry_projects_to_empty_record() {
        assert_eq!(project_book(&json!("oops")), BookRecord::default());
    }

    #[test]
    fn test_preserves_order_and_count() {
        let payload = payload_with(json!([{"id": 3}, {"id": 1}, {"id": 2}]));
        let result = project(&payload);
        assert_eq!(result.count, 3);
        assert_eq!(result.message, None);
        let ids: Vec<_> = result.books.iter().map(|b| b.id.clone().unwrap()).collect();
        assert_eq!(ids, vec![json!(3), json!(1), json!(2)]);
    }
}
