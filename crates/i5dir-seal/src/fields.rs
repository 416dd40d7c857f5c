//! Required-field and structural checks on raw records.
//!
//! Runs before any transformation. A record with any issue is counted
//! invalid and never partially transformed.

use i5dir_core::RawBusinessRecord;

/// Required scalar and address fields on every raw record. An empty list
/// means the record passes on to the transformer.
#[must_use]
pub fn required_field_issues(raw: &RawBusinessRecord) -> Vec<String> {
    let mut issues = Vec::new();

    if is_blank(raw.name.as_deref()) {
        issues.push("missing required field: name".to_string());
    }
    if is_blank(raw.phone.as_deref()) {
        issues.push("missing required field: phone".to_string());
    }

    match &raw.address {
        None => issues.push("missing required field: address".to_string()),
        Some(address) => {
            if is_blank(address.street.as_deref()) {
                issues.push("missing required field: address.street".to_string());
            }
            if is_blank(address.city.as_deref()) {
                issues.push("missing required field: address.city".to_string());
            }
            if is_blank(address.state.as_deref()) {
                issues.push("missing required field: address.state".to_string());
            }
            if is_blank(address.zip_code.as_deref()) {
                issues.push("missing required field: address.zipCode".to_string());
            }
            if let Some(state) = address.state.as_deref() {
                if !state.is_empty() && state != "OR" {
                    issues.push(format!("address.state is \"{state}\", expected \"OR\""));
                }
            }
        }
    }

    issues
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use i5dir_core::RawAddress;

    fn full_record() -> RawBusinessRecord {
        RawBusinessRecord {
            name: Some("Rose City Electric".into()),
            phone: Some("5035551234".into()),
            address: Some(RawAddress {
                street: Some("100 SW Main St".into()),
                city: Some("Portland".into()),
                state: Some("OR".into()),
                zip_code: Some("97204".into()),
            }),
            ..RawBusinessRecord::default()
        }
    }

    #[test]
    fn complete_record_has_no_issues() {
        assert!(required_field_issues(&full_record()).is_empty());
    }

    #[test]
    fn missing_name_and_phone_are_both_reported() {
        let raw = RawBusinessRecord {
            name: None,
            phone: Some(String::new()),
            ..full_record()
        };
        let issues = required_field_issues(&raw);
        assert!(issues.iter().any(|i| i.contains("name")));
        assert!(issues.iter().any(|i| i.contains("phone")));
    }

    #[test]
    fn missing_address_is_a_single_issue() {
        let raw = RawBusinessRecord {
            address: None,
            ..full_record()
        };
        let issues = required_field_issues(&raw);
        assert_eq!(issues, vec!["missing required field: address"]);
    }

    #[test]
    fn each_empty_address_subfield_is_reported() {
        let raw = RawBusinessRecord {
            address: Some(RawAddress::default()),
            ..full_record()
        };
        let issues = required_field_issues(&raw);
        assert_eq!(issues.len(), 4);
        assert!(issues.iter().any(|i| i.ends_with("address.zipCode")));
    }

    #[test]
    fn non_oregon_state_names_the_offending_value() {
        let mut raw = full_record();
        raw.address.as_mut().unwrap().state = Some("WA".into());
        let issues = required_field_issues(&raw);
        assert_eq!(issues, vec!["address.state is \"WA\", expected \"OR\""]);
    }
}
