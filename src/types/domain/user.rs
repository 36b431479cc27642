use poem_openapi::Enum;
use serde::{Deserialize, Serialize};

/// Positions an RT/RW official can hold
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    #[oai(rename = "Ketua RT")]
    #[serde(rename = "Ketua RT")]
    KetuaRt,

    #[oai(rename = "Ketua RW")]
    #[serde(rename = "Ketua RW")]
    KetuaRw,

    #[oai(rename = "Wakil Ketua RT/RW")]
    #[serde(rename = "Wakil Ketua RT/RW")]
    WakilKetua,

    #[oai(rename = "Sekretaris")]
    #[serde(rename = "Sekretaris")]
    Sekretaris,

    #[oai(rename = "Bendahara")]
    #[serde(rename = "Bendahara")]
    Bendahara,

    #[oai(rename = "Seksi Keamanan")]
    #[serde(rename = "Seksi Keamanan")]
    SeksiKeamanan,

    #[oai(rename = "Seksi Kebersihan")]
    #[serde(rename = "Seksi Kebersihan")]
    SeksiKebersihan,

    #[oai(rename = "Anggota")]
    #[serde(rename = "Anggota")]
    Anggota,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::KetuaRt => "Ketua RT",
            Position::KetuaRw => "Ketua RW",
            Position::WakilKetua => "Wakil Ketua RT/RW",
            Position::Sekretaris => "Sekretaris",
            Position::Bendahara => "Bendahara",
            Position::SeksiKeamanan => "Seksi Keamanan",
            Position::SeksiKebersihan => "Seksi Kebersihan",
            Position::Anggota => "Anggota",
        }
    }
}

/// A registered RT/RW official account
///
/// Passwords are stored as argon2 hashes only; the plaintext never
/// round-trips through the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store on creation
    #[serde(default)]
    pub id: String,
    pub full_name: String,
    pub username: String,
    pub password_hash: String,
    pub position: Position,
    pub rt: String,
    pub rw: String,
    pub created_at: String,
}
