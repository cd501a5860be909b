//! Accessor and cache-field naming.

/// Default property name for a type: the part after the last namespace
/// separator. Generic arguments are not part of the name.
///
/// `Some.Name.Space.MyCoolComponent` → `MyCoolComponent`
pub fn default_property_name(type_name: &str) -> &str {
    let base = type_name.split('<').next().unwrap_or(type_name).trim();
    let after_alias = base.rsplit("::").next().unwrap_or(base);
    after_alias.rsplit('.').next().unwrap_or(after_alias)
}

/// Cache field backing a property: first character lower-cased, `_` prefix.
///
/// `MyCoolComponent` → `_myCoolComponent`
pub fn cache_field_name(property_name: &str) -> String {
    let mut chars = property_name.chars();
    let mut field = String::with_capacity(property_name.len() + 1);
    field.push('_');
    if let Some(first) = chars.next() {
        field.extend(first.to_lowercase());
        field.push_str(chars.as_str());
    }
    field
}
