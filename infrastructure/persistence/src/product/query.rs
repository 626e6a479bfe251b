use serde_json::{Map, Value, json};

use business::domain::product::model::FindRequest;

/// Search request body: filters, then `from`/`size` paging taken verbatim.
pub fn search_body(request: &FindRequest) -> Value {
    json!({
        "query": search_query(request),
        "from": request.offset,
        "size": request.limit,
    })
}

/// Name is a scored fuzzy `must` clause, price a non-scoring `filter`; a bool
/// query requires both. No filters falls back to `match_all`.
fn search_query(request: &FindRequest) -> Value {
    let mut clauses = Map::new();

    if let Some(name) = &request.name {
        clauses.insert(
            "must".to_string(),
            json!([{ "match": { "name": { "query": name, "fuzziness": "AUTO" } } }]),
        );
    }

    if let Some(range) = request.bounded_price_range() {
        let mut bounds = Map::new();
        if let Some(from) = range.from {
            bounds.insert("gte".to_string(), from.into());
        }
        if let Some(to) = range.to {
            bounds.insert("lte".to_string(), to.into());
        }
        clauses.insert(
            "filter".to_string(),
            json!([{ "range": { "price": bounds } }]),
        );
    }

    if clauses.is_empty() {
        json!({ "match_all": {} })
    } else {
        json!({ "bool": clauses })
    }
}
