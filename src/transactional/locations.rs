use std::any::type_name;

pub const CLASSPATH_PREFIX: &str = "classpath:";
pub const CONFIG_EXTENSION: &str = "xml";

/// Classpath resource holding the configuration for the named test type.
///
/// Both `.` and `::` separate path segments, and generic arguments are
/// dropped: `com.example.FooTest` gives `classpath:com/example/FooTest.xml`.
pub fn config_location_for_name(qualified_name: &str) -> String {
    let name = match qualified_name.find('<') {
        Some(end) => &qualified_name[..end],
        None => qualified_name,
    };
    format!(
        "{}{}.{}",
        CLASSPATH_PREFIX,
        name.replace("::", "/").replace('.', "/"),
        CONFIG_EXTENSION
    )
}

pub fn config_locations<T: ?Sized>() -> Vec<String> {
    vec![config_location_for_name(type_name::<T>())]
}
