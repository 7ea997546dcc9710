use crate::Result;
use crate::formatters::PageReport;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Convert a report to JSON
///
/// A report holding only one half is rendered as that half alone, so the
/// output matches the payload of the corresponding HTTP endpoint.
pub fn convert_to_json(report: &PageReport, config: &JsonConfig) -> Result<String> {
    let value = match (&report.contacts, &report.outline) {
        (Some(contacts), None) => serde_json::to_value(contacts)?,
        (None, Some(outline)) => serde_json::to_value(outline)?,
        _ => serde_json::to_value(report)?,
    };

    if config.pretty { Ok(serde_json::to_string_pretty(&value)?) } else { Ok(serde_json::to_string(&value)?) }
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, report: &PageReport) -> Result<String> {
        convert_to_json(report, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::ContactSet;
    use crate::outline::ContentOutline;

    fn contacts() -> ContactSet {
        ContactSet { email: Some("hi@acme.test".to_string()), ..Default::default() }
    }

    fn outline() -> ContentOutline {
        ContentOutline {
            source: "https://acme.test".to_string(),
            title: Some("Acme".to_string()),
            description: None,
            highlights: Vec::new(),
            sections: Vec::new(),
        }
    }

    #[test]
    fn test_contacts_only_is_flat() {
        let report = PageReport { contacts: Some(contacts()), outline: None };
        let json: serde_json::Value = serde_json::from_str(&convert_to_json(&report, &JsonConfig::default()).unwrap()).unwrap();

        assert_eq!(json["email"], "hi@acme.test");
        assert!(json["instagram"].is_null());
        assert!(json.get("contacts").is_none());
    }

    #[test]
    fn test_outline_only_is_flat() {
        let report = PageReport { contacts: None, outline: Some(outline()) };
        let json: serde_json::Value = serde_json::from_str(&convert_to_json(&report, &JsonConfig::default()).unwrap()).unwrap();

        assert_eq!(json["source"], "https://acme.test");
        assert_eq!(json["title"], "Acme");
    }

    #[test]
    fn test_full_report_is_nested() {
        let report = PageReport { contacts: Some(contacts()), outline: Some(outline()) };
        let json: serde_json::Value = serde_json::from_str(&convert_to_json(&report, &JsonConfig::default()).unwrap()).unwrap();

        assert_eq!(json["contacts"]["email"], "hi@acme.test");
        assert_eq!(json["outline"]["title"], "Acme");
    }

    #[test]
    fn test_pretty_output() {
        let report = PageReport { contacts: Some(contacts()), outline: None };
        let formatter = JsonFormatter::new(JsonConfig { pretty: true });
        let output = formatter.convert(&report).unwrap();

        assert!(output.contains('\n'));
        assert!(output.contains("  \"email\""));
    }
}
