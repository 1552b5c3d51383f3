use crate::errors::ReportDeskError;

const DANGEROUS_PATTERNS: &[&str] = &[
    "<script",
    "javascript:",
    "data:",
    "file:",
    "vbscript:",
];

/// Reject config strings that would smuggle a non-HTTP scheme or markup
/// into URLs the client navigates to.
pub fn validate_security_patterns(value: &serde_yaml::Value) -> Result<(), ReportDeskError> {
    check_value(value, &[])
}

fn check_value(value: &serde_yaml::Value, path: &[String]) -> Result<(), ReportDeskError> {
    match value {
        serde_yaml::Value::String(s) => {
            let lower = s.to_lowercase();
            for pattern in DANGEROUS_PATTERNS {
                if lower.contains(pattern) {
                    let path_str = if path.is_empty() { "root".to_string() } else { path.join(".") };
                    return Err(ReportDeskError::Config(format!(
                        "Dangerous pattern '{}' found at config path: {}",
                        pattern, path_str
                    )));
                }
            }
            Ok(())
        }
        serde_yaml::Value::Mapping(map) => {
            for (k, v) in map {
                let key = k.as_str().unwrap_or("unknown").to_string();
                let mut new_path = path.to_vec();
                new_path.push(key);
                check_value(v, &new_path)?;
            }
            Ok(())
        }
        serde_yaml::Value::Sequence(seq) => {
            for (i, v) in seq.iter().enumerate() {
                let mut new_path = path.to_vec();
                new_path.push(format!("[{}]", i));
                check_value(v, &new_path)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_config_passes() {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str("server:\n  base_url: http://localhost:5000\n").unwrap();
        assert!(validate_security_patterns(&yaml).is_ok());
    }

    #[test]
    fn test_javascript_url_rejected() {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str("server:\n  base_url: \"javascript:alert(1)\"\n").unwrap();
        let err = validate_security_patterns(&yaml).unwrap_err();
        assert!(err.to_string().contains("server.base_url"));
    }

    #[test]
    fn test_file_scheme_rejected() {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str("server:\n  base_url: file:///etc/passwd\n").unwrap();
        assert!(validate_security_patterns(&yaml).is_err());
    }
}
