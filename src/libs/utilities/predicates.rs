// Pure format predicates. Every function here is total: malformed input
// yields `false` (or `None` for the parse helpers), never a panic.

/// Parses a signed decimal integer, surrounding whitespace ignored.
pub fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

/// Parses a finite decimal number.
pub fn parse_decimal(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Case-insensitive membership in `literals`. The literal set differs per
/// use site (XML flags take `true|false`, some line files also `yes|no|0|1`).
pub fn is_boolean_literal(value: &str, literals: &[&str]) -> bool {
    is_one_of(value, literals)
}

/// Case-insensitive membership in `allowed`.
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    let value = value.trim();
    allowed.iter().any(|candidate| candidate.eq_ignore_ascii_case(value))
}

/// Splits `"512mb"` into `(512, "mb")`. The unit may be empty and is returned
/// as written; a space between amount and unit is tolerated.
pub fn split_amount_unit(value: &str) -> Option<(u64, &str)> {
    let value = value.trim();
    let digits_end = value
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    if digits_end == 0 {
        return None;
    }
    let amount = value[..digits_end].parse::<u64>().ok()?;
    Some((amount, value[digits_end..].trim()))
}

pub const MEMORY_UNITS: &[&str] = &["b", "k", "kb", "m", "mb", "g", "gb", "t", "tb"];

/// DNS name, IPv4 address, or bracketed IPv6 literal.
pub fn is_hostname(host: &str) -> bool {
    if let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        return !inner.is_empty() && inner.chars().all(|c| c.is_ascii_hexdigit() || c == ':' || c == '.');
    }
    if host.is_empty() || host.len() > 253 {
        return false;
    }
    host.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    })
}

/// Splits `host:port` (or `[v6]:port`) at the port colon. `None` if there is
/// no port part.
pub fn split_host_port(value: &str) -> Option<(&str, &str)> {
    let value = value.trim();
    if value.starts_with('[') {
        let close = value.find(']')?;
        let rest = value[close + 1..].strip_prefix(':')?;
        return Some((&value[..=close], rest));
    }
    value.rsplit_once(':')
}

/// Scheme part of `scheme://rest`, if the value has that shape.
pub fn url_scheme(value: &str) -> Option<&str> {
    let (scheme, rest) = value.trim().split_once("://")?;
    let mut chars = scheme.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !first_ok || !rest_ok || rest.chars().any(char::is_whitespace) {
        return None;
    }
    Some(scheme)
}

/// Anything that can name a file: non-blank, no control characters.
pub fn is_path(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && !value.chars().any(char::is_control)
}

/// Kerberos principal `primary[/instance]@REALM`.
pub fn is_principal(value: &str) -> bool {
    let Some((name, realm)) = value.trim().rsplit_once('@') else {
        return false;
    };
    let valid_part = |part: &str| {
        !part.is_empty()
            && part.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '$'))
    };
    let name_ok = match name.split_once('/') {
        Some((primary, instance)) => valid_part(primary) && valid_part(instance),
        None => valid_part(name),
    };
    name_ok && valid_part(realm)
}

/// Fully-qualified Java class name (`$` allowed for nested classes).
pub fn is_java_class_name(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty()
        && value.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn numbers() {
        assert_eq!(parse_integer(" 2181 "), Some(2181));
        assert_eq!(parse_integer("21a"), None);
        assert_eq!(parse_decimal("0.25"), Some(0.25));
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
    }

    #[test]
    fn amounts_and_units() {
        assert_eq!(split_amount_unit("512M"), Some((512, "M")));
        assert_eq!(split_amount_unit("4 gb"), Some((4, "gb")));
        assert_eq!(split_amount_unit("1024"), Some((1024, "")));
        assert_eq!(split_amount_unit("g"), None);
        assert_eq!(split_amount_unit("-5s"), None);
    }

    #[test]
    fn hosts_and_ports() {
        assert!(is_hostname("broker-1.example.com"));
        assert!(is_hostname("10.0.0.5"));
        assert!(is_hostname("[::1]"));
        assert!(!is_hostname("-bad.example.com"));
        assert!(!is_hostname("a..b"));
        assert_eq!(split_host_port("broker-1:9092"), Some(("broker-1", "9092")));
        assert_eq!(split_host_port("[::1]:2181"), Some(("[::1]", "2181")));
        assert_eq!(split_host_port("[::1]"), None);
        assert_eq!(split_host_port("host2"), None);
    }

    #[test]
    fn urls_principals_classes() {
        assert_eq!(url_scheme("hdfs://nn:8020/hbase"), Some("hdfs"));
        assert_eq!(url_scheme("s3a://bucket/x"), Some("s3a"));
        assert_eq!(url_scheme("nn:8020/hbase"), None);
        assert_eq!(url_scheme("1x://a"), None);
        assert!(is_principal("hbase/_HOST@EXAMPLE.COM"));
        assert!(is_principal("hive@EXAMPLE.COM"));
        assert!(!is_principal("hbase/_HOST"));
        assert!(!is_principal("@EXAMPLE.COM"));
        assert!(is_java_class_name("org.apache.hadoop.io.compress.SnappyCodec"));
        assert!(is_java_class_name("a.B$Inner"));
        assert!(!is_java_class_name("org..Foo"));
        assert!(!is_java_class_name("1org.Foo"));
    }

    proptest! {
        #[test]
        fn predicates_never_panic(s in "\\PC{0,40}") {
            let _ = parse_integer(&s);
            let _ = parse_decimal(&s);
            let _ = split_amount_unit(&s);
            let _ = split_host_port(&s);
            let _ = is_hostname(&s);
            let _ = url_scheme(&s);
            let _ = is_path(&s);
            let _ = is_principal(&s);
            let _ = is_java_class_name(&s);
        }

        #[test]
        fn split_host_port_rejoins(s in ".{0,24}") {
            if let Some((host, port)) = split_host_port(&s) {
                prop_assert_eq!(format!("{host}:{port}"), s.trim());
            }
        }
    }
}
