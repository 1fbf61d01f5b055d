//! Field kind enumeration for the metadata system

/// How a field is parsed from form input and rendered in tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    LongText, // multi-line textarea
    Integer,
    Decimal,
    Date,     // YYYY-MM-DD
    Bool,
    ImageUrl, // rendered as <img src=...>
    Photo,    // base64 JPEG payload
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::LongText => "long_text",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Date => "date",
            Self::Bool => "bool",
            Self::ImageUrl => "image_url",
            Self::Photo => "photo",
        }
    }

    /// `type` attribute of the HTML input used to edit the field
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Integer | Self::Decimal => "number",
            Self::Date => "date",
            Self::Bool => "checkbox",
            Self::Photo => "file",
            Self::Text | Self::LongText | Self::ImageUrl => "text",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Decimal)
    }
}
