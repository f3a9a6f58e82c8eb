//! Locale-keyed tables for subject prefixes and quoted header labels
//!
//! Extension point for new locales: add a row here rather than branching
//! in the matching code. Tables are compiled into alternation patterns
//! once, at first use.

/// Per-locale tokens used by subject normalization and header extraction
pub struct LocaleTable {
    /// ISO 639-1 code, informational
    pub locale: &'static str,

    /// Reply subject prefixes ("RE", "AW", ...), matched with an optional
    /// bracketed counter like "RE[3]"
    pub reply_prefixes: &'static [&'static str],

    /// Forward subject prefixes ("FW", "FWD", "WG", ...)
    pub forward_prefixes: &'static [&'static str],

    /// Bold header labels naming the sender
    pub from_labels: &'static [&'static str],

    /// Bold header labels naming the sent/received date
    pub sent_labels: &'static [&'static str],

    /// Bold header labels naming the subject
    pub subject_labels: &'static [&'static str],
}

/// Supported locales, tried in table order
pub const LOCALES: &[LocaleTable] = &[
    LocaleTable {
        locale: "en",
        reply_prefixes: &["RE"],
        forward_prefixes: &["FW", "FWD"],
        from_labels: &["From"],
        sent_labels: &["Sent", "Date"],
        subject_labels: &["Subject"],
    },
    LocaleTable {
        locale: "nl",
        reply_prefixes: &["AW", "ANTW"],
        forward_prefixes: &["DOORST"],
        from_labels: &["Van"],
        sent_labels: &["Verzonden", "Datum"],
        subject_labels: &["Onderwerp"],
    },
    LocaleTable {
        locale: "de",
        reply_prefixes: &["AW"],
        forward_prefixes: &["WG"],
        from_labels: &["Von"],
        sent_labels: &["Gesendet"],
        subject_labels: &["Betreff"],
    },
    LocaleTable {
        locale: "fr",
        reply_prefixes: &["RE", "RÉF"],
        forward_prefixes: &["TR"],
        from_labels: &["De"],
        sent_labels: &["Envoyé"],
        subject_labels: &["Objet"],
    },
    LocaleTable {
        locale: "sv",
        reply_prefixes: &["SV"],
        forward_prefixes: &["VB"],
        from_labels: &["Från"],
        sent_labels: &["Skickat"],
        subject_labels: &["Ämne"],
    },
    LocaleTable {
        locale: "pl",
        reply_prefixes: &["ODP"],
        forward_prefixes: &["PD"],
        from_labels: &["Od"],
        sent_labels: &["Wysłano"],
        subject_labels: &["Temat"],
    },
];

/// Join one field of every locale into a regex alternation
fn alternation(select: fn(&LocaleTable) -> &'static [&'static str]) -> String {
    let mut tokens: Vec<String> = LOCALES
        .iter()
        .flat_map(|t| select(t).iter().map(|s| regex::escape(s)))
        .collect();
    tokens.dedup();
    tokens.join("|")
}

/// Alternation of all from-labels across locales
#[must_use]
pub fn from_label_alternation() -> String {
    alternation(|t| t.from_labels)
}

/// Alternation of all sent/date labels across locales
#[must_use]
pub fn sent_label_alternation() -> String {
    alternation(|t| t.sent_labels)
}

/// Alternation of all subject labels across locales
#[must_use]
pub fn subject_label_alternation() -> String {
    alternation(|t| t.subject_labels)
}

/// Alternation of every header label, for thread boundary detection
#[must_use]
pub fn header_label_alternation() -> String {
    [
        from_label_alternation(),
        sent_label_alternation(),
        subject_label_alternation(),
    ]
    .join("|")
}
