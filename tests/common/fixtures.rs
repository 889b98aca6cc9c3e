//! Canned RIMS payloads and a generated PDF

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use serde_json::{Value, json};

pub const RULE_TEXT: &str = "Robots must stay inside the field";

pub fn faq_body() -> Value {
    json!({
        "answered": [
            {
                "number": 3,
                "question": "Can the robot be remote controlled?",
                "answer": "Only during the exhibition round.",
                "question_image": null
            },
            {
                "number": "4",
                "question": null,
                "answer": "See the rule book."
            }
        ]
    })
}

pub fn rules_body(rule_books: Value) -> Value {
    json!({
        "rules": {
            "name": "Robot Soccer 2024",
            "abstract": "Two robots per team.",
            "rule_books": rule_books,
            "field_books": null
        }
    })
}

pub fn teams_body() -> Value {
    json!({
        "teams": [
            { "team_name": "Gearheads", "team_org": "North High", "status": 4, "match": { "round": 1 } },
            { "team_name": "Sparks", "team_org": "East Tech", "status": 12 },
            { "team_name": "Bolt", "status": "pending" }
        ]
    })
}

/// A one-page PDF showing `text` in Courier.
pub fn sample_pdf(text: &str) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 24.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("Failed to encode content"),
    ));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("Failed to write PDF");
    bytes
}
