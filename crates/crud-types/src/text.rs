//! Display helpers that turn resource identifiers into human-readable labels.

/// Grammatical number requested for a resource label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Plurality {
    Singular,
    #[default]
    Plural,
}

/// Words that have no distinct plural form.
const UNCOUNTABLE: &[&str] = &[
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "information",
    "media",
    "metadata",
    "news",
    "series",
    "sheep",
    "software",
    "species",
];

/// Singular/plural pairs that no suffix rule covers.
const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("echo", "echoes"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("half", "halves"),
    ("hero", "heroes"),
    ("knife", "knives"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("loaf", "loaves"),
    ("man", "men"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("potato", "potatoes"),
    ("shelf", "shelves"),
    ("thief", "thieves"),
    ("tomato", "tomatoes"),
    ("tooth", "teeth"),
    ("wife", "wives"),
    ("wolf", "wolves"),
    ("woman", "women"),
];

/// Plural form of the last word in `text`.
///
/// Words that already look plural are returned unchanged, so
/// `pluralize("posts") == "posts"`.
pub fn pluralize(text: &str) -> String {
    map_last_word(text, plural_word)
}

/// Singular form of the last word in `text`.
pub fn singularize(text: &str) -> String {
    map_last_word(text, singular_word)
}

/// Turn an identifier such as `blogPosts` or `blog_posts` into `Blog posts`.
pub fn humanize(text: &str) -> String {
    let mut spaced = String::with_capacity(text.len() + 4);
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if let Some(p) = prev {
            if c.is_uppercase() && (p.is_lowercase() || p.is_ascii_digit()) {
                spaced.push(' ');
            }
        }
        if c == '_' || c == '-' {
            spaced.push(' ');
        } else {
            spaced.extend(c.to_lowercase());
        }
        prev = Some(c);
    }

    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
    capitalize(&collapsed)
}

/// Label shown to users for a resource name, e.g. `blog_post` → `Blog posts`.
pub fn user_friendly_resource_name(name: &str, plurality: Plurality) -> String {
    match plurality {
        Plurality::Plural => humanize(&pluralize(name)),
        Plurality::Singular => humanize(&singularize(name)),
    }
}

fn map_last_word(text: &str, f: fn(&str) -> String) -> String {
    let start = text
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_alphabetic())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let (head, word) = text.split_at(start);
    if word.is_empty() {
        return text.to_string();
    }

    let lower = word.to_lowercase();
    let mapped = f(&lower);
    format!("{head}{}", restore_case(word, &mapped))
}

fn restore_case(original: &str, mapped: &str) -> String {
    let all_upper = original.chars().count() > 1 && original.chars().all(char::is_uppercase);
    if all_upper {
        return mapped.to_uppercase();
    }

    // Keep the caller's casing on the shared stem, the new suffix stays lower-case.
    let mut out = String::with_capacity(mapped.len());
    let mut original_chars = original.chars();
    let mut diverged = false;
    for m in mapped.chars() {
        match original_chars.next() {
            Some(o) if !diverged && o.to_lowercase().eq(std::iter::once(m)) => out.push(o),
            _ => {
                diverged = true;
                out.push(m);
            }
        }
    }
    out
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn plural_word(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(s, p)| *s == word || *p == word) {
        return plural.to_string();
    }

    if let Some(stem) = word.strip_suffix("is") {
        return format!("{stem}es");
    }
    if word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") {
        return word.to_string();
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|s| word.ends_with(s)) {
        return format!("{word}es");
    }
    if let Some(stem) = word.strip_suffix('y') {
        if stem.chars().last().is_some_and(|c| !is_vowel(c)) {
            return format!("{stem}ies");
        }
    }
    format!("{word}s")
}

fn singular_word(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(s, p)| *p == word || *s == word) {
        return singular.to_string();
    }

    if let Some(stem) = word.strip_suffix("yses") {
        return format!("{stem}ysis");
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    for suffix in ["sses", "tuses", "xes", "zes", "ches", "shes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}
