//! Domain-level constants.
//!
//! These constants define the business rules applied before persistence.

// =============================================================================
// Address Normalization
// =============================================================================

/// Maximum stored length of an address line, in characters
pub const ADDRESS_LINE_MAX_LEN: usize = 30;

/// Literal substitutions applied to address lines, in priority order.
///
/// Matching is case-sensitive and non-overlapping; replaced text is never
/// re-scanned.
pub const ADDRESS_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("pasaje", "Pje."),
    ("Pasaje", "Pje."),
    ("avenida", "Av."),
    ("Avenida", "Av."),
    ("esquina", "esq."),
    ("Esquina", "esq."),
    ("departamento", "depto."),
    ("Departamento", "depto."),
    ("\u{00BA}", ""),
    ("\u{00B0}", ""),
];
