use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use std::io::Cursor;

use educoin_lib::types::Center;
use educoin_lib::{Page, PaymentRecord};

/// Recursively write a serde_json::Value as XML elements.
fn write_value<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &serde_json::Value,
) -> Result<(), quick_xml::Error> {
    let text = match value {
        // Omit null fields entirely
        serde_json::Value::Null => return Ok(()),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(arr) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            for item in arr {
                write_value(writer, "item", item)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
            return Ok(());
        }
        serde_json::Value::Object(map) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            for (key, val) in map {
                write_value(writer, key, val)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
            return Ok(());
        }
    };
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(&text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Serialize a slice of Serialize items into an XML document. `attributes`
/// land on the root element.
fn items_to_xml<T: Serialize>(
    root_tag: &str,
    item_tag: &str,
    attributes: &[(&str, String)],
    items: &[T],
) -> anyhow::Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new(root_tag);
    for (key, value) in attributes {
        root.push_attribute((*key, value.as_str()));
    }

    if items.is_empty() {
        writer.write_event(Event::Empty(root))?;
    } else {
        writer.write_event(Event::Start(root))?;
        for item in items {
            let val = serde_json::to_value(item)?;
            write_value(&mut writer, item_tag, &val)?;
        }
        writer.write_event(Event::End(BytesEnd::new(root_tag)))?;
    }

    let buf = writer.into_inner().into_inner();
    Ok(String::from_utf8(buf)?)
}

/// One page of payments, with the page position on the root element.
pub fn payments_page_to_xml(page: &Page<'_, PaymentRecord>) -> anyhow::Result<String> {
    let attributes = [
        ("pageNumber", page.page_number.to_string()),
        ("totalPages", page.total_pages.to_string()),
        ("hasPrev", page.has_prev.to_string()),
        ("hasNext", page.has_next.to_string()),
    ];
    items_to_xml("payments", "payment", &attributes, page.items)
}

pub fn centers_to_xml(centers: &[Center]) -> anyhow::Result<String> {
    items_to_xml("centers", "center", &[], centers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use educoin_lib::{flatten_payments, get_page};
    use educoin_lib::types::CenterPayments;

    fn load_records_fixture() -> Vec<PaymentRecord> {
        let json_str = include_str!("../../educoin_api/tests/fixtures/payments.json");
        let centers: Vec<CenterPayments> = serde_json::from_str(json_str).unwrap();
        flatten_payments(centers)
    }

    fn load_centers_fixture() -> Vec<Center> {
        let json_str = include_str!("../../educoin_api/tests/fixtures/centers.json");
        serde_json::from_str(json_str).unwrap()
    }

    fn assert_xml_parseable(xml: &str) {
        use quick_xml::Reader;

        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Err(e) => panic!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                ),
                _ => {}
            }
        }
    }

    #[test]
    fn test_payment_xml_wellformed() {
        let records = load_records_fixture();
        let xml = payments_page_to_xml(&get_page(&records, 10, 1)).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(
            "<payments pageNumber=\"1\" totalPages=\"1\" hasPrev=\"false\" hasNext=\"false\">"
        ));
        assert!(xml.contains("</payments>"));
        assert!(xml.contains("<payment>"));
        assert!(xml.contains("<id>101</id>"));
        assert!(xml.contains("<id>p-201</id>"));
        assert!(xml.contains("<amount>1250000</amount>"));
        assert!(xml.contains("<paidVia>payme</paidVia>"));
        assert_xml_parseable(&xml);
    }

    #[test]
    fn test_center_xml_output() {
        let xml = centers_to_xml(&load_centers_fixture()).unwrap();
        assert!(xml.contains("<centers>"));
        assert!(xml.contains("<center>"));
        assert!(xml.contains("<name>PDP Academy</name>"));
        assert_xml_parseable(&xml);
    }

    #[test]
    fn test_payment_xml_carries_page_position() {
        let records = load_records_fixture();
        let xml = payments_page_to_xml(&get_page(&records, 2, 2)).unwrap();
        assert!(xml.contains("pageNumber=\"2\""));
        assert!(xml.contains("totalPages=\"2\""));
        assert!(xml.contains("hasPrev=\"true\""));
        assert!(xml.contains("hasNext=\"false\""));
        assert!(xml.contains("<id>p-201</id>"));
        assert!(!xml.contains("<id>101</id>"));
        assert_xml_parseable(&xml);
    }

    #[test]
    fn test_empty_list_produces_self_closing_root() {
        let records: Vec<PaymentRecord> = Vec::new();
        let xml = payments_page_to_xml(&get_page(&records, 10, 1)).unwrap();
        assert!(xml.contains(
            "<payments pageNumber=\"1\" totalPages=\"0\" hasPrev=\"false\" hasNext=\"false\"/>"
        ));
        assert!(!xml.contains("</payments>"));

        let xml = centers_to_xml(&[]).unwrap();
        assert!(xml.contains("<centers/>"));
    }

    #[test]
    fn test_xml_special_chars_escaped() {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        write_value(
            &mut writer,
            "centerName",
            &serde_json::Value::String("Ota & Ona <Markaz>".to_string()),
        )
        .unwrap();
        let xml = String::from_utf8(writer.into_inner().into_inner()).unwrap();
        assert!(xml.contains("&amp;"));
        assert!(xml.contains("&lt;"));
        assert!(xml.contains("&gt;"));
    }

    #[test]
    fn test_null_fields_omitted() {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        write_value(
            &mut writer,
            "center",
            &serde_json::json!({"id": null, "name": "X"}),
        )
        .unwrap();
        let xml = String::from_utf8(writer.into_inner().into_inner()).unwrap();
        assert!(!xml.contains("<id>"));
        assert!(xml.contains("<name>X</name>"));
    }
}
