// src/macros.rs

#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! regex {
    // Compiled-once regex for a literal pattern.
    // Patterns are literals checked by the unit tests, so a bad one fails there first.
    ($pat:literal) => {{
        static RE: ::std::sync::LazyLock<::regex::Regex> =
            ::std::sync::LazyLock::new(|| ::regex::Regex::new($pat).expect("literal regex"));
        &*RE
    }};
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}
