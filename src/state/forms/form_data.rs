//! Registration record and change events

use super::field::FieldName;

/// A single field edit reported by a field widget.
/// `value` is the field's complete new value, not a delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub name: FieldName,
    pub value: String,
}

impl ChangeEvent {
    pub fn new(name: FieldName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    /// Build a change event from a raw `{name, value}` pair
    #[cfg(test)]
    pub fn parse(
        name: &str,
        value: impl Into<String>,
    ) -> Result<Self, super::field::UnknownField> {
        Ok(Self::new(name.parse()?, value))
    }
}

/// Everything the user has entered so far. All values are plain strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub reg_details: String,
    pub whatsapp: String,
    pub email: String,
    pub branch: String,
    pub gender: String,
    pub github: String,
    pub skills: String,
    pub primary_domain: String,
    pub secondary_domain: String,
    pub achievements: String,
    pub projects: String,
    pub competitive: String,
}

impl FormData {
    /// Current value of a field
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::RegDetails => &self.reg_details,
            FieldName::Whatsapp => &self.whatsapp,
            FieldName::Email => &self.email,
            FieldName::Branch => &self.branch,
            FieldName::Gender => &self.gender,
            FieldName::Github => &self.github,
            FieldName::Skills => &self.skills,
            FieldName::PrimaryDomain => &self.primary_domain,
            FieldName::SecondaryDomain => &self.secondary_domain,
            FieldName::Achievements => &self.achievements,
            FieldName::Projects => &self.projects,
            FieldName::Competitive => &self.competitive,
        }
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::Name => &mut self.name,
            FieldName::RegDetails => &mut self.reg_details,
            FieldName::Whatsapp => &mut self.whatsapp,
            FieldName::Email => &mut self.email,
            FieldName::Branch => &mut self.branch,
            FieldName::Gender => &mut self.gender,
            FieldName::Github => &mut self.github,
            FieldName::Skills => &mut self.skills,
            FieldName::PrimaryDomain => &mut self.primary_domain,
            FieldName::SecondaryDomain => &mut self.secondary_domain,
            FieldName::Achievements => &mut self.achievements,
            FieldName::Projects => &mut self.projects,
            FieldName::Competitive => &mut self.competitive,
        }
    }

    /// Apply a change event, replacing exactly one field
    pub fn apply(&mut self, change: ChangeEvent) {
        *self.slot_mut(change.name) = change.value;
    }

    /// Whether a field has no content
    pub fn is_empty(&self, field: FieldName) -> bool {
        self.get(field).is_empty()
    }
}
