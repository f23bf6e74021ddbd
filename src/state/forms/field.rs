//! Registration field definitions
//!
//! The field set is closed: every field is a [`FieldName`] variant and its
//! presentation lives in a static [`FieldSpec`] table.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Branch selector options
pub const BRANCHES: &[&str] = &[
    "CSE",
    "CSE (AIML)",
    "Chemical",
    "Civil",
    "ETC",
    "EEE",
    "EE",
    "Mechanical",
    "MME",
    "Production",
];

/// Primary/secondary domain selector options
pub const DOMAINS: &[&str] = &[
    "Web Dev",
    "App Dev",
    "Game Dev",
    "AI / ML",
    "Cloud",
    "Cybersecurity",
    "Competitive Programming",
    "Outreach",
    "UI / UX",
];

/// Gender radio options as (label, stored value)
pub const GENDERS: &[(&str, &str)] = &[("Male", "male"), ("Female", "female")];

/// Name of a registration field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Name,
    RegDetails,
    Whatsapp,
    Email,
    Branch,
    Gender,
    Github,
    Skills,
    PrimaryDomain,
    SecondaryDomain,
    Achievements,
    Projects,
    Competitive,
}

impl FieldName {
    /// Every field, in form order
    pub const ALL: [FieldName; 13] = [
        FieldName::Name,
        FieldName::RegDetails,
        FieldName::Whatsapp,
        FieldName::Email,
        FieldName::Branch,
        FieldName::Gender,
        FieldName::Github,
        FieldName::Skills,
        FieldName::PrimaryDomain,
        FieldName::SecondaryDomain,
        FieldName::Achievements,
        FieldName::Projects,
        FieldName::Competitive,
    ];

    /// Fields covered by the bulk "all required" check.
    /// The profile link is checked separately and is not listed here.
    pub const REQUIRED: [FieldName; 9] = [
        FieldName::Name,
        FieldName::RegDetails,
        FieldName::Whatsapp,
        FieldName::Email,
        FieldName::Branch,
        FieldName::Gender,
        FieldName::Skills,
        FieldName::PrimaryDomain,
        FieldName::SecondaryDomain,
    ];

    /// Wire name used in change events
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::RegDetails => "regDetails",
            FieldName::Whatsapp => "whatsapp",
            FieldName::Email => "email",
            FieldName::Branch => "branch",
            FieldName::Gender => "gender",
            FieldName::Github => "github",
            FieldName::Skills => "skills",
            FieldName::PrimaryDomain => "primaryDomain",
            FieldName::SecondaryDomain => "secondaryDomain",
            FieldName::Achievements => "achievements",
            FieldName::Projects => "projects",
            FieldName::Competitive => "competitive",
        }
    }

    /// Presentation metadata for this field
    pub fn spec(self) -> &'static FieldSpec {
        // FIELDS is declared in the same order as the enum
        &FIELDS[self as usize]
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Change event named a field that does not exist
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Form section headings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    CoreInfo,
    Classification,
    TechnicalSpecs,
    OptionalData,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::CoreInfo,
        Section::Classification,
        Section::TechnicalSpecs,
        Section::OptionalData,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::CoreInfo => "CORE INFO",
            Section::Classification => "CLASSIFICATION",
            Section::TechnicalSpecs => "TECHNICAL SPECS",
            Section::OptionalData => "OPTIONAL DATA",
        }
    }

    /// Fields rendered under this heading, in form order
    pub fn fields(self) -> impl Iterator<Item = &'static FieldSpec> {
        FIELDS.iter().filter(move |spec| spec.section == self)
    }
}

/// Kind of input control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text { multiline: bool },
    Select(&'static [&'static str]),
    Radio(&'static [(&'static str, &'static str)]),
}

/// Static description of a field's control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: FieldName,
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Fixed text shown before the value (e.g. a dialling code)
    pub prefix: Option<&'static str>,
    pub kind: FieldKind,
    /// Whether the label carries an asterisk
    pub marked: bool,
    pub section: Section,
}

impl FieldSpec {
    const fn text(
        name: FieldName,
        label: &'static str,
        placeholder: &'static str,
        marked: bool,
        section: Section,
    ) -> Self {
        Self {
            name,
            label,
            placeholder,
            prefix: None,
            kind: FieldKind::Text { multiline: false },
            marked,
            section,
        }
    }

    const fn select(
        name: FieldName,
        label: &'static str,
        options: &'static [&'static str],
        section: Section,
    ) -> Self {
        Self {
            name,
            label,
            placeholder: "",
            prefix: None,
            kind: FieldKind::Select(options),
            marked: true,
            section,
        }
    }

    /// Number of rows the control needs inside its border
    pub fn content_height(&self) -> u16 {
        match self.kind {
            FieldKind::Text { multiline: true } => 3,
            _ => 1,
        }
    }

    /// Options offered by a select or radio control
    pub fn option_count(&self) -> usize {
        match self.kind {
            FieldKind::Text { .. } => 0,
            FieldKind::Select(options) => options.len(),
            FieldKind::Radio(options) => options.len(),
        }
    }
}

/// Field table in form order
pub static FIELDS: [FieldSpec; 13] = [
    FieldSpec::text(
        FieldName::Name,
        "Full Name",
        "Enter your name",
        true,
        Section::CoreInfo,
    ),
    FieldSpec::text(
        FieldName::RegDetails,
        "Registration No",
        "250XXXXXXX",
        true,
        Section::CoreInfo,
    ),
    FieldSpec {
        name: FieldName::Whatsapp,
        label: "Whatsapp Number",
        placeholder: "XXXXX XXXXX",
        prefix: Some("+91"),
        kind: FieldKind::Text { multiline: false },
        marked: true,
        section: Section::CoreInfo,
    },
    FieldSpec::text(
        FieldName::Email,
        "Email ID",
        "enigma@gmail.com",
        true,
        Section::CoreInfo,
    ),
    FieldSpec::select(FieldName::Branch, "Branch", BRANCHES, Section::Classification),
    FieldSpec {
        name: FieldName::Gender,
        label: "Gender",
        placeholder: "",
        prefix: None,
        kind: FieldKind::Radio(GENDERS),
        marked: true,
        section: Section::Classification,
    },
    FieldSpec::text(
        FieldName::Github,
        "Github Profile",
        "https://github.com/...",
        true,
        Section::TechnicalSpecs,
    ),
    FieldSpec {
        name: FieldName::Skills,
        label: "Skills",
        placeholder: "List your programming languages, frameworks, or tools...",
        prefix: None,
        kind: FieldKind::Text { multiline: true },
        marked: true,
        section: Section::TechnicalSpecs,
    },
    FieldSpec::select(
        FieldName::PrimaryDomain,
        "Primary Domain",
        DOMAINS,
        Section::TechnicalSpecs,
    ),
    FieldSpec::select(
        FieldName::SecondaryDomain,
        "Secondary Domain",
        DOMAINS,
        Section::TechnicalSpecs,
    ),
    FieldSpec::text(
        FieldName::Achievements,
        "Academic Achievements",
        "Hackathon wins, ranks...",
        false,
        Section::OptionalData,
    ),
    FieldSpec::text(
        FieldName::Projects,
        "Projects Link",
        "Hosted link or Drive folder",
        false,
        Section::OptionalData,
    ),
    FieldSpec::text(
        FieldName::Competitive,
        "Codeforces/Leetcode",
        "Profile Links",
        false,
        Section::OptionalData,
    ),
];
