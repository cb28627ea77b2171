use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use super::pet::{Pet, PetId};
use super::photo::Photo;
use super::{redacted, Redacted};
use crate::cpf::{is_valid_cpf, normalize_cpf};
use crate::validation::{is_blank, trimmed_or_absent, RequestRules, ValidationError};

/// Type-safe identifier for Tutors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TutorId(pub u32);

impl From<u32> for TutorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for TutorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tutor (pet owner), as the backend returns it.
///
/// `cpf` holds digits only. `pets` are the linked pets as of the last read; the backend
/// refreshes them from the pet store whenever the tutor is returned.
///
/// Debug output hides the contact data and the CPF.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutor {
    pub id: TutorId,
    pub nome: String,
    pub telefone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foto: Option<Photo>,
    #[serde(default)]
    pub pets: Vec<Pet>,
}

impl Tutor {
    /// Builds a tutor without photo or pets from an already sanitized request.
    pub fn new(id: TutorId, request: TutorRequest) -> Self {
        Self {
            id,
            nome: request.nome,
            telefone: request.telefone,
            email: request.email,
            endereco: request.endereco,
            cpf: request.cpf,
            foto: None,
            pets: Vec::new(),
        }
    }

    /// Overwrites the contact fields, keeping photo and pets.
    pub fn apply(&mut self, request: TutorRequest) {
        self.nome = request.nome;
        self.telefone = request.telefone;
        self.email = request.email;
        self.endereco = request.endereco;
        self.cpf = request.cpf;
    }

    pub fn has_pet(&self, pet_id: PetId) -> bool {
        self.pets.iter().any(|pet| pet.id == pet_id)
    }
}

/// Payload for creating or replacing a tutor. Debug output hides the contact data and
/// the CPF.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TutorRequest {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
}

impl TutorRequest {
    pub fn new(nome: impl Into<String>, telefone: impl Into<String>) -> Self {
        Self {
            nome: nome.into(),
            telefone: telefone.into(),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_endereco(mut self, endereco: impl Into<String>) -> Self {
        self.endereco = Some(endereco.into());
        self
    }

    pub fn with_cpf(mut self, cpf: impl Into<String>) -> Self {
        self.cpf = Some(cpf.into());
        self
    }
}

impl fmt::Debug for Tutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tutor")
            .field("id", &self.id)
            .field("nome", &self.nome)
            .field("telefone", &Redacted)
            .field("email", &redacted(&self.email))
            .field("endereco", &redacted(&self.endereco))
            .field("cpf", &redacted(&self.cpf))
            .field("foto", &self.foto)
            .field("pets", &self.pets)
            .finish()
    }
}

impl fmt::Debug for TutorRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TutorRequest")
            .field("nome", &self.nome)
            .field("telefone", &Redacted)
            .field("email", &redacted(&self.email))
            .field("endereco", &redacted(&self.endereco))
            .field("cpf", &redacted(&self.cpf))
            .finish()
    }
}

impl RequestRules for TutorRequest {
    /// Name, then phone, then CPF. A CPF with no digits counts as absent.
    fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(Some(self.nome.as_str())) {
            return Err(ValidationError::TutorNameRequired);
        }
        if is_blank(Some(self.telefone.as_str())) {
            return Err(ValidationError::PhoneRequired);
        }

        let cpf = normalize_cpf(self.cpf.as_deref().unwrap_or_default());
        if !cpf.is_empty() && !is_valid_cpf(&cpf) {
            return Err(ValidationError::InvalidCpf);
        }
        Ok(())
    }

    fn sanitize(&self) -> Self {
        let cpf = normalize_cpf(self.cpf.as_deref().unwrap_or_default());

        Self {
            nome: self.nome.trim().to_string(),
            telefone: self.telefone.trim().to_string(),
            email: trimmed_or_absent(self.email.as_deref()),
            endereco: trimmed_or_absent(self.endereco.as_deref()),
            cpf: (!cpf.is_empty()).then_some(cpf),
        }
    }
}

/// List criteria for tutors: case-insensitive name substring (ignored when blank) and
/// the pet they are linked to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TutorFilter {
    pub nome: Option<String>,
    pub pet: Option<PetId>,
}

impl TutorFilter {
    pub fn by_nome(nome: impl Into<String>) -> Self {
        Self {
            nome: Some(nome.into()),
            pet: None,
        }
    }

    /// Tutors linked to `pet`.
    pub fn by_pet(pet: PetId) -> Self {
        Self {
            nome: None,
            pet: Some(pet),
        }
    }

    pub fn accepts(&self, tutor: &Tutor) -> bool {
        super::contains_ignore_case(Some(tutor.nome.as_str()), self.nome.as_deref())
            && self.pet.map_or(true, |pet| tutor.has_pet(pet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joao() -> TutorRequest {
        TutorRequest::new("  João  ", "  11 99999-9999  ")
            .with_email("   ")
            .with_endereco("  Rua A  ")
            .with_cpf("529.982.247-25")
    }

    #[test]
    fn test_rules_are_checked_in_order() {
        let blank_everything = TutorRequest::new(" ", " ").with_cpf("123");
        assert_eq!(
            blank_everything.validate(),
            Err(ValidationError::TutorNameRequired)
        );

        let blank_phone = TutorRequest::new("Ana", "").with_cpf("123");
        assert_eq!(blank_phone.validate(), Err(ValidationError::PhoneRequired));

        let bad_cpf = TutorRequest::new("Ana", "11999999999").with_cpf("529.982.247-24");
        assert_eq!(bad_cpf.validate(), Err(ValidationError::InvalidCpf));
    }

    #[test]
    fn test_blank_name_scenario() {
        let request = TutorRequest::new("   ", "11999999999");
        let error = request.validate().unwrap_err();
        assert_eq!(error, ValidationError::TutorNameRequired);
        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn test_cpf_is_optional() {
        assert_eq!(TutorRequest::new("Ana", "1199").validate(), Ok(()));
        assert_eq!(
            TutorRequest::new("Ana", "1199").with_cpf("").validate(),
            Ok(())
        );
        // No digits at all counts as absent.
        assert_eq!(
            TutorRequest::new("Ana", "1199").with_cpf(" .- ").validate(),
            Ok(())
        );
    }

    #[test]
    fn test_short_or_repeated_cpf_is_invalid() {
        for cpf in ["123", "000.000.000-00", "5299822472500"] {
            assert_eq!(
                TutorRequest::new("Ana", "1199").with_cpf(cpf).validate(),
                Err(ValidationError::InvalidCpf),
                "cpf {cpf:?}"
            );
        }
    }

    #[test]
    fn test_sanitize_scenario() {
        assert_eq!(joao().validate(), Ok(()));
        assert_eq!(
            joao().sanitize(),
            TutorRequest {
                nome: "João".to_string(),
                telefone: "11 99999-9999".to_string(),
                email: None,
                endereco: Some("Rua A".to_string()),
                cpf: Some("52998224725".to_string()),
            }
        );
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let requests = [
            joao(),
            TutorRequest::new("Ana", "1199").with_email(" ana@exemplo.com "),
            TutorRequest::new("Bia", "11 3333-4444").with_cpf("123.456.789-09"),
        ];
        for request in requests {
            let once = request.sanitize();
            assert_eq!(once.sanitize(), once);
        }
    }

    #[test]
    fn test_sanitized_wire_format() {
        let json = serde_json::to_value(joao().sanitize()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nome": "João",
                "telefone": "11 99999-9999",
                "endereco": "Rua A",
                "cpf": "52998224725"
            })
        );
    }

    #[test]
    fn test_apply_keeps_photo_and_pets() {
        let mut tutor = Tutor::new(TutorId(1), TutorRequest::new("Ana", "1199"));
        tutor.pets.push(Pet::new(PetId(3), crate::model::PetRequest::new("Rex")));

        tutor.apply(TutorRequest::new("Ana Maria", "1188"));
        assert_eq!(tutor.nome, "Ana Maria");
        assert!(tutor.has_pet(PetId(3)));
        assert!(!tutor.has_pet(PetId(4)));
    }

    #[test]
    fn test_filter() {
        let mut tutor = Tutor::new(TutorId(1), TutorRequest::new("João Silva", "1199"));
        tutor.pets.push(Pet::new(PetId(3), crate::model::PetRequest::new("Rex")));

        assert!(TutorFilter::default().accepts(&tutor));
        assert!(TutorFilter::by_nome("SILVA").accepts(&tutor));
        assert!(!TutorFilter::by_nome("Souza").accepts(&tutor));
        assert!(TutorFilter::by_pet(PetId(3)).accepts(&tutor));
        assert!(!TutorFilter::by_pet(PetId(4)).accepts(&tutor));
    }

    #[test]
    fn test_debug_hides_contact_data() {
        let request = joao().with_email("joao@exemplo.com");
        let tutor = Tutor::new(TutorId(1), request.sanitize());

        for rendered in [format!("{request:?}"), format!("{tutor:?}")] {
            assert!(rendered.contains("João"), "{rendered}");
            for secret in ["529.982.247-25", "52998224725", "99999-9999", "joao@exemplo.com", "Rua A"] {
                assert!(!rendered.contains(secret), "{secret} leaked in {rendered}");
            }
        }
        // Absent optional fields still read as absent.
        assert!(format!("{:?}", TutorRequest::new("Ana", "1")).contains("cpf: None"));
    }
}
