//! Record types returned by the DGII service.

use serde::{Deserialize, Serialize};

/// Registration information for a cedula, as reported by DGII.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInfo {
    /// The requested number, compact form.
    pub cedula: String,
    /// The registered name.
    pub name: String,
    /// An additional commercial name, when registered.
    pub commercial_name: Option<String>,
    /// Status code: "1" inactive, "2" active.
    pub status: String,
    /// Category code (observed to always be "0").
    pub category: String,
    /// Payment regime code: "1" N/D, "2" NORMAL, "3" PST.
    pub payment_regime: String,
}

/// Raw row shape embedded in the `GetContribuyentesResult` payload.
#[derive(Debug, Deserialize)]
pub(crate) struct ContribuyenteRow {
    #[serde(rename = "RGE_RUC")]
    pub rge_ruc: String,
    #[serde(rename = "RGE_NOMBRE")]
    pub rge_nombre: String,
    #[serde(rename = "NOMBRE_COMERCIAL", default)]
    pub nombre_comercial: Option<String>,
    #[serde(rename = "ESTATUS", default)]
    pub estatus: String,
    #[serde(rename = "CATEGORIA", default)]
    pub categoria: String,
    #[serde(rename = "REGIMEN_PAGOS", default)]
    pub regimen_pagos: String,
}

impl From<ContribuyenteRow> for RegistrationInfo {
    fn from(row: ContribuyenteRow) -> Self {
        // the service reports the number under its RNC field name even for
        // cedula lookups
        let commercial_name = row
            .nombre_comercial
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        RegistrationInfo {
            cedula: row.rge_ruc,
            name: row.rge_nombre.trim().to_string(),
            commercial_name,
            status: row.estatus,
            category: row.categoria,
            payment_regime: row.regimen_pagos,
        }
    }
}
