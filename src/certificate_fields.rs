use crate::{Error, KeySize, ValidityPeriod};

/// The user-supplied portion of a certificate, i.e. the contents of the issuance form.  Only
/// `common_name` and `organization` are required, and that requirement is enforced by whoever
/// submits the form (see [`CertificateFields::check_required`]), not by the registry.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateFields {
    pub common_name: String,
    pub organization: String,
    pub organizational_unit: String,
    pub country: String,
    pub state: String,
    pub locality: String,
    pub email: String,
    pub validity_days: ValidityPeriod,
    pub key_size: KeySize,
}

impl CertificateFields {
    /// Returns an error naming the first required field that is empty (or whitespace-only).
    pub fn check_required(&self) -> Result<(), Error> {
        if self.common_name.trim().is_empty() {
            return Err(Error::MissingRequiredField("commonName"));
        }
        if self.organization.trim().is_empty() {
            return Err(Error::MissingRequiredField("organization"));
        }
        Ok(())
    }
    pub fn is_submittable(&self) -> bool {
        self.check_required().is_ok()
    }
    /// Clears the per-subject fields after a successful submission.  Country, state, locality,
    /// validity period and key size are kept, since consecutive entries tend to share them.
    pub fn clear_subject_fields(&mut self) {
        self.common_name.clear();
        self.organization.clear();
        self.organizational_unit.clear();
        self.email.clear();
    }
    /// Sets a single field from its textual form.  The enumerated fields reject values outside
    /// their enumerations, in which case the form is left unchanged.
    pub fn set(&mut self, form_field: FormField, value: &str) -> Result<(), Error> {
        match form_field {
            FormField::CommonName => self.common_name = value.to_string(),
            FormField::Organization => self.organization = value.to_string(),
            FormField::OrganizationalUnit => self.organizational_unit = value.to_string(),
            FormField::Country => self.country = value.to_string(),
            FormField::State => self.state = value.to_string(),
            FormField::Locality => self.locality = value.to_string(),
            FormField::Email => self.email = value.to_string(),
            FormField::ValidityDays => self.validity_days = value.parse()?,
            FormField::KeySize => self.key_size = value.parse()?,
        }
        Ok(())
    }
    /// Returns the textual form of a single field.
    pub fn get(&self, form_field: FormField) -> String {
        match form_field {
            FormField::CommonName => self.common_name.clone(),
            FormField::Organization => self.organization.clone(),
            FormField::OrganizationalUnit => self.organizational_unit.clone(),
            FormField::Country => self.country.clone(),
            FormField::State => self.state.clone(),
            FormField::Locality => self.locality.clone(),
            FormField::Email => self.email.clone(),
            FormField::ValidityDays => self.validity_days.to_string(),
            FormField::KeySize => self.key_size.to_string(),
        }
    }
}

/// Identifies one editable field of [`CertificateFields`], named as in the exported JSON.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FormField {
    CommonName,
    Organization,
    OrganizationalUnit,
    Country,
    State,
    Locality,
    Email,
    ValidityDays,
    KeySize,
}

impl FormField {
    pub const VARIANTS: [FormField; 9] = [
        FormField::CommonName,
        FormField::Organization,
        FormField::OrganizationalUnit,
        FormField::Country,
        FormField::State,
        FormField::Locality,
        FormField::Email,
        FormField::ValidityDays,
        FormField::KeySize,
    ];
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::CommonName => "commonName",
            FormField::Organization => "organization",
            FormField::OrganizationalUnit => "organizationalUnit",
            FormField::Country => "country",
            FormField::State => "state",
            FormField::Locality => "locality",
            FormField::Email => "email",
            FormField::ValidityDays => "validityDays",
            FormField::KeySize => "keySize",
        }
    }
    pub fn is_required(&self) -> bool {
        matches!(self, FormField::CommonName | FormField::Organization)
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FormField {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .into_iter()
            .find(|form_field| form_field.as_str() == s)
            .ok_or(Error::Invalid("unrecognized form field"))
    }
}
