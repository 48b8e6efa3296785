use crate::error::FieldError;
use crate::fields::FieldName;
use crate::wizard::Stage;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// The user-facing text of the wizard: field labels, validation templates,
/// screen titles and prompts.
///
/// Length templates carry `{field}` and `{n}` placeholders that [`render`]
/// fills from the error. The catalog is plain data, so alternate languages
/// load from JSON without touching code; [`spanish`] is the reference
/// catalog, transcribed verbatim from the observed product.
///
/// [`render`]: MessageCatalog::render
/// [`spanish`]: MessageCatalog::spanish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageCatalog {
    labels: AHashMap<FieldName, String>,
    required: String,
    min_length: String,
    max_length: String,
    cancel_prompt: String,
    home_title: String,
    stage_titles: AHashMap<Stage, String>,
    periodicity_prompt: String,
}

impl MessageCatalog {
    /// The catalog of the observed product, word for word.
    pub fn spanish() -> Self {
        let labels = AHashMap::from_iter([
            (FieldName::Name, "Nombre".to_string()),
            (FieldName::Description, "Descripción".to_string()),
            (FieldName::Host, "Host".to_string()),
            (FieldName::Port, "Puerto".to_string()),
            (FieldName::User, "Usuario".to_string()),
            (FieldName::Password, "Contraseña".to_string()),
            (FieldName::Origin, "Origen".to_string()),
            (FieldName::Destination, "Destino".to_string()),
            (FieldName::Regex, "Regex".to_string()),
        ]);
        let stage_titles = AHashMap::from_iter([
            (Stage::BasicData, "Datos básicos".to_string()),
            (Stage::ConnectionData, "Datos de conexión".to_string()),
            (Stage::ConfigurationData, "Configuración".to_string()),
            (Stage::SchedulePeriodicity, "Programar periodicidad".to_string()),
        ]);
        Self {
            labels,
            required: "Campo obligatorio".to_string(),
            min_length: "La longitud mínima permitida para el \"{field}\" es de {n} caracteres"
                .to_string(),
            max_length: "La longitud máxima permitida para el \"{field}\" es de {n} caracteres"
                .to_string(),
            cancel_prompt: "¿Estás seguro de cancelar la creación de la parametrización?"
                .to_string(),
            home_title: "Nueva parametrización".to_string(),
            stage_titles,
            periodicity_prompt: "Programar periodicidad cada:".to_string(),
        }
    }

    /// The on-screen label for a field; falls back to the internal name for
    /// fields the catalog does not cover.
    pub fn label(&self, field: FieldName) -> &str {
        self.labels
            .get(&field)
            .map(String::as_str)
            .unwrap_or(field.as_str())
    }

    /// The title shown above a stage's form.
    pub fn stage_title(&self, stage: Stage) -> &str {
        self.stage_titles
            .get(&stage)
            .map(String::as_str)
            .unwrap_or(stage.as_str())
    }

    pub fn cancel_prompt(&self) -> &str {
        &self.cancel_prompt
    }

    pub fn home_title(&self) -> &str {
        &self.home_title
    }

    pub fn periodicity_prompt(&self) -> &str {
        &self.periodicity_prompt
    }

    /// Renders a validation failure exactly as the product shows it under
    /// the offending field.
    pub fn render(&self, error: &FieldError) -> String {
        match error {
            FieldError::MissingRequired { .. } => self.required.clone(),
            FieldError::TooShort { field, min, .. } => self.fill(&self.min_length, *field, *min),
            FieldError::TooLong { field, max, .. } => self.fill(&self.max_length, *field, *max),
        }
    }

    fn fill(&self, template: &str, field: FieldName, n: usize) -> String {
        template
            .replace("{field}", self.label(field))
            .replace("{n}", &n.to_string())
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::spanish()
    }
}
