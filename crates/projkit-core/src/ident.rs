//! Canonical identifier construction and decomposition.
//!
//! A component identifier concatenates the present attributes in a fixed
//! order, each carrying its own leading delimiter:
//!
//! ```text
//! [vendor::]class[&bundle][:group][:sub][&variant][@version]
//! ```
//!
//! Empty attributes contribute nothing, not even their delimiter, so two
//! attribute records that differ only in which absent fields they omit
//! produce identical identifiers. Decomposition is the exact inverse for
//! every populated subset, with one documented ambiguity: a variant suffix
//! may syntactically appear on both the group and sub segments, in which
//! case the sub segment's value wins.

use projkit_schema::{ComponentAttributes, PackAttributes};

/// Separator between vendor and the rest of an identifier.
pub const VENDOR_SUFFIX: &str = "::";
/// Delimiter preceding the bundle name.
pub const BUNDLE_PREFIX: &str = "&";
/// Delimiter preceding the group name.
pub const GROUP_PREFIX: &str = ":";
/// Delimiter preceding the sub-group name.
pub const SUB_PREFIX: &str = ":";
/// Delimiter preceding the variant name.
pub const VARIANT_PREFIX: &str = "&";
/// Delimiter preceding the version.
pub const VERSION_PREFIX: &str = "@";

/// The single canonicalization fold: concatenates `delimiter + value` for
/// every pair with a non-empty value, in order.
///
/// All identifier kinds differ only in which `(delimiter, value)` pairs they
/// pass and in what order.
pub fn construct_id(elements: &[(&str, &str)]) -> String {
    let mut id = String::new();
    for (delimiter, value) in elements {
        if !value.is_empty() {
            id.push_str(delimiter);
            id.push_str(value);
        }
    }
    id
}

fn vendor_part(vendor: &str) -> String {
    if vendor.is_empty() {
        String::new()
    } else {
        format!("{vendor}{VENDOR_SUFFIX}")
    }
}

/// Fully specified component identifier:
/// `[vendor::]class[&bundle][:group][:sub][&variant][@version]`.
pub fn component_id(component: &ComponentAttributes) -> String {
    let vendor = vendor_part(&component.vendor);
    construct_id(&[
        ("", &vendor),
        ("", &component.class),
        (BUNDLE_PREFIX, &component.bundle),
        (GROUP_PREFIX, &component.group),
        (SUB_PREFIX, &component.sub),
        (VARIANT_PREFIX, &component.variant),
        (VERSION_PREFIX, &component.version),
    ])
}

/// Component aggregate identifier: the full identifier without variant and
/// version, naming a family of variants/versions of the same component.
pub fn component_aggregate_id(component: &ComponentAttributes) -> String {
    let vendor = vendor_part(&component.vendor);
    construct_id(&[
        ("", &vendor),
        ("", &component.class),
        (BUNDLE_PREFIX, &component.bundle),
        (GROUP_PREFIX, &component.group),
        (SUB_PREFIX, &component.sub),
    ])
}

/// Partial component identifier: without vendor and version, naming a
/// component irrespective of the pack supplying it.
pub fn partial_component_id(component: &ComponentAttributes) -> String {
    construct_id(&[
        ("", &component.class),
        (BUNDLE_PREFIX, &component.bundle),
        (GROUP_PREFIX, &component.group),
        (SUB_PREFIX, &component.sub),
        (VARIANT_PREFIX, &component.variant),
    ])
}

/// Condition identifier: the condition's tag followed by the component
/// identifier built from the condition's attributes.
pub fn condition_id(tag: &str, condition: &ComponentAttributes) -> String {
    format!("{tag} {}", component_id(condition))
}

/// Pack identifier: `[vendor::]name[@version]`.
pub fn pack_id(pack: &PackAttributes) -> String {
    let vendor = vendor_part(&pack.vendor);
    construct_id(&[
        ("", &vendor),
        ("", &pack.name),
        (VERSION_PREFIX, &pack.version),
    ])
}

/// Splits `s` at the first `delimiter` into (prefix, suffix); the suffix is
/// empty when the delimiter is absent.
fn split_affix(s: &str, delimiter: char) -> (&str, &str) {
    s.split_once(delimiter).unwrap_or((s, ""))
}

/// Decomposes a full component identifier back into its attribute record.
///
/// The inverse of [`component_id`]. Decomposition never fails: missing parts
/// leave the corresponding fields empty, and segments beyond the third are
/// ignored. If both the group and sub segments carry a `&variant` suffix,
/// the sub segment's value wins (last write wins) -- a well-formed identifier
/// never carries both.
pub fn component_attributes_from_id(id: &str) -> ComponentAttributes {
    let mut attrs = ComponentAttributes::default();

    // Everything before "::" is the vendor.
    let rest = match id.split_once(VENDOR_SUFFIX) {
        Some((vendor, rest)) => {
            attrs.vendor = vendor.to_string();
            rest
        }
        None => id,
    };

    // Everything after the last '@' is the version.
    let rest = match rest.rfind('@') {
        Some(pos) => {
            attrs.version = rest[pos + 1..].to_string();
            &rest[..pos]
        }
        None => rest,
    };

    for (index, segment) in rest.split(':').enumerate() {
        match index {
            // class[&bundle]
            0 => {
                let (class, bundle) = split_affix(segment, '&');
                attrs.class = class.to_string();
                attrs.bundle = bundle.to_string();
            }
            // group[&variant]
            1 => {
                let (group, variant) = split_affix(segment, '&');
                attrs.group = group.to_string();
                if !variant.is_empty() {
                    attrs.variant = variant.to_string();
                }
            }
            // sub[&variant]
            2 => {
                let (sub, variant) = split_affix(segment, '&');
                attrs.sub = sub.to_string();
                if !variant.is_empty() {
                    attrs.variant = variant.to_string();
                }
            }
            _ => {}
        }
    }

    attrs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(
        vendor: &str,
        class: &str,
        bundle: &str,
        group: &str,
        sub: &str,
        variant: &str,
        version: &str,
    ) -> ComponentAttributes {
        ComponentAttributes {
            vendor: vendor.into(),
            class: class.into(),
            bundle: bundle.into(),
            group: group.into(),
            sub: sub.into(),
            variant: variant.into(),
            version: version.into(),
        }
    }

    #[test]
    fn test_full_component_id() {
        let full = attrs("ARM", "CMSIS", "Bundle", "CORE", "Sub", "Variant", "5.6.0");
        assert_eq!(
            component_id(&full),
            "ARM::CMSIS&Bundle:CORE:Sub&Variant@5.6.0"
        );
    }

    #[test]
    fn test_component_id_elides_empty_fields() {
        let sparse = attrs("", "Driver", "", "USART", "", "", "1.0.0");
        assert_eq!(component_id(&sparse), "Driver:USART@1.0.0");
    }

    #[test]
    fn test_aggregate_excludes_variant_and_version() {
        let full = attrs("ARM", "CMSIS", "", "CORE", "", "Custom", "5.6.0");
        assert_eq!(component_aggregate_id(&full), "ARM::CMSIS:CORE");
    }

    #[test]
    fn test_partial_excludes_vendor_and_version() {
        let full = attrs("ARM", "CMSIS", "", "CORE", "", "Custom", "5.6.0");
        assert_eq!(partial_component_id(&full), "CMSIS:CORE&Custom");
    }

    #[test]
    fn test_condition_id() {
        let condition = attrs("", "Device", "", "Startup", "", "", "");
        assert_eq!(condition_id("require", &condition), "require Device:Startup");
    }

    #[test]
    fn test_pack_id() {
        let pack = PackAttributes::new("ARM", "CMSIS", "5.9.0");
        assert_eq!(pack_id(&pack), "ARM::CMSIS@5.9.0");

        let unversioned = PackAttributes::new("", "CMSIS", "");
        assert_eq!(pack_id(&unversioned), "CMSIS");
    }

    #[test]
    fn test_decompose_full() {
        let decomposed =
            component_attributes_from_id("ARM::CMSIS&Bundle:CORE:Sub&Variant@5.6.0");
        assert_eq!(
            decomposed,
            attrs("ARM", "CMSIS", "Bundle", "CORE", "Sub", "Variant", "5.6.0")
        );
    }

    #[test]
    fn test_decompose_partial_forms() {
        assert_eq!(
            component_attributes_from_id("Driver:USART@1.0.0"),
            attrs("", "Driver", "", "USART", "", "", "1.0.0")
        );
        assert_eq!(
            component_attributes_from_id("Driver"),
            attrs("", "Driver", "", "", "", "", "")
        );
        assert_eq!(
            component_attributes_from_id("ARM::Driver"),
            attrs("ARM", "Driver", "", "", "", "", "")
        );
    }

    #[test]
    fn test_decompose_variant_on_group_segment() {
        assert_eq!(
            component_attributes_from_id("Class:Group&Variant:Sub"),
            attrs("", "Class", "", "Group", "Sub", "Variant", "")
        );
    }

    #[test]
    fn test_decompose_variant_last_write_wins() {
        // A variant on both the group and sub segments is not a well-formed
        // identifier; the sub segment's value wins.
        let decomposed = component_attributes_from_id("Class:Group&First:Sub&Second");
        assert_eq!(decomposed.variant, "Second");
    }

    #[test]
    fn test_decompose_ignores_extra_segments() {
        let decomposed = component_attributes_from_id("Class:Group:Sub:Extra:More");
        assert_eq!(
            decomposed,
            attrs("", "Class", "", "Group", "Sub", "", "")
        );
    }

    #[test]
    fn test_decompose_empty_input() {
        assert_eq!(
            component_attributes_from_id(""),
            ComponentAttributes::default()
        );
    }

    #[test]
    fn test_round_trip_populated_subsets() {
        let cases = [
            attrs("", "Class", "", "", "", "", ""),
            attrs("Vendor", "Class", "", "", "", "", ""),
            attrs("", "Class", "Bundle", "", "", "", ""),
            attrs("", "Class", "", "Group", "", "", ""),
            attrs("", "Class", "", "Group", "Sub", "", ""),
            attrs("", "Class", "", "Group", "Sub", "Variant", ""),
            attrs("Vendor", "Class", "Bundle", "Group", "Sub", "Variant", "1.2.3"),
            attrs("Vendor", "Class", "", "", "", "", "0.9.0"),
        ];
        for case in cases {
            let id = component_id(&case);
            assert_eq!(component_attributes_from_id(&id), case, "id: {id}");
            // Re-constructing from the decomposition reproduces the string.
            assert_eq!(component_id(&component_attributes_from_id(&id)), id);
        }
    }
}
