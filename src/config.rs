//! Source roster configuration.
//!
//! The roster is a plain value built once at start-up, either from the
//! built-in defaults or from a YAML file, validated eagerly, and then handed
//! to [`crate::registry::SourceRegistry`]. Nothing reads it as global state.
//!
//! # YAML layout
//!
//! ```yaml
//! digest_color: "FFD700"
//! active: [Hande-Fırat, Murat-Yetkin]
//! sources:
//!   - id: Hande-Fırat
//!     url: https://www.hurriyet.com.tr/yazarlar/hande-firat/
//!     extractor: hurriyet
//!     color: "1E90FF"
//!   - id: Murat-Yetkin
//!     url: https://yetkinreport.com/author/muratmyetkin/
//!     extractor: yetkin_report
//!     color: "FF4500"
//! ```

use crate::error::{Error, Result};
use crate::models::SourceDescriptor;
use crate::scrapers::ExtractorKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, instrument};
use url::Url;

/// Colour of the daily digest sheet header (gold).
pub const DEFAULT_DIGEST_COLOR: &str = "FFD700";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Ids to process, in run order.
    pub active: Vec<String>,
    pub sources: Vec<SourceDescriptor>,
    #[serde(default = "default_digest_color")]
    pub digest_color: String,
}

fn default_digest_color() -> String {
    DEFAULT_DIGEST_COLOR.to_string()
}

const ROSTER: &[(&str, &str, ExtractorKind, &str)] = &[
    ("Abdulkadir-Selvi", "https://www.hurriyet.com.tr/yazarlar/abdulkadir-selvi/", ExtractorKind::Hurriyet, "D2B48C"),
    ("Seref-Oguz", "https://www.ekonomim.com/yazar/seref-oguz/1093", ExtractorKind::Ekonomim, "F0E68C"),
    ("Alaattin-Aktas", "https://www.ekonomim.com/yazar/alaattin-aktas/30", ExtractorKind::Ekonomim, "CD853F"),
    ("Barıs-Soydan", "https://10haber.net/yazarlar/baris-soydan/", ExtractorKind::OnHaber, "BC8F8F"),
    ("Deniz-Zeyrek", "https://www.sozcu.com.tr/kategori/yazarlar/deniz-zeyrek/", ExtractorKind::Sozcu, "FFA07A"),
    ("Dilek-Gungor", "https://www.sabah.com.tr/yazarlar/dilek-gungor/arsiv?getall=true", ExtractorKind::Sabah, "90EE90"),
    ("Fatih-Ozatay", "https://www.ekonomim.com/yazar/fatih-ozatay/85", ExtractorKind::Ekonomim, "00CED1"),
    ("Haluk-Burumcekci", "https://gazeteoksijen.com/yazarlar/haluk-burumcekci", ExtractorKind::GazeteOksijen, "FF8C00"),
    ("Hande-Fırat", "https://www.hurriyet.com.tr/yazarlar/hande-firat/", ExtractorKind::Hurriyet, "1E90FF"),
    ("Kerem-Alkin", "https://www.sabah.com.tr/yazarlar/kerem-alkin/arsiv?getall=true", ExtractorKind::Sabah, "9370DB"),
    ("Mahfi-Egilmez", "https://www.mahfiegilmez.com/", ExtractorKind::MahfiEgilmez, "BA55D3"),
    ("Muharrem-Sarıkaya", "https://www.haberturk.com/ozel-icerikler/muharrem-sarikaya", ExtractorKind::Haberturk, "FF69B4"),
    ("Murat-Yetkin", "https://yetkinreport.com/author/muratmyetkin/", ExtractorKind::YetkinReport, "FF4500"),
    ("Nagehan-Alci", "https://www.haberturk.com/ozel-icerikler/nagehan-alci", ExtractorKind::Haberturk, "FFDAB9"),
    ("Okan-Muderrisoglu", "https://www.sabah.com.tr/yazarlar/muderrisoglu/arsiv?getall=true", ExtractorKind::Sabah, "EEE8AA"),
    ("Ugur-Gürses", "https://ugurses.net/", ExtractorKind::UgurGurses, "BDB76B"),
    ("Kerim-Rota", "https://www.perspektif.online/author/kerim-rota/", ExtractorKind::Perspektif, "6B8E23"),
    ("Sant-Manukyan", "https://www.ekonomim.com/yazar/sant-manukyan/163", ExtractorKind::Ekonomim, "8FBC8F"),
    ("Atilla-Yesilada", "https://www.paraanaliz.com/yazarlar/atilla-yesilada/", ExtractorKind::ParaAnaliz, "20B2AA"),
    ("Zeynep-Gurcanli", "https://www.ekonomim.com/yazar/zeynep-gurcanli/1125", ExtractorKind::Ekonomim, "87CEFA"),
    ("Sedat-Ergin", "https://www.hurriyet.com.tr/yazarlar/sedat-ergin/", ExtractorKind::Hurriyet, "8470FF"),
    ("Murat-Sabuncu", "https://t24.com.tr/yazarlar/murat-sabuncu", ExtractorKind::T24, "CD5C5C"),
];

impl Default for Config {
    fn default() -> Self {
        let sources: Vec<SourceDescriptor> = ROSTER
            .iter()
            .map(|(id, url, extractor, color)| SourceDescriptor {
                id: id.to_string(),
                url: url.to_string(),
                extractor: *extractor,
                color: color.to_string(),
            })
            .collect();
        Self {
            active: sources.iter().map(|s| s.id.clone()).collect(),
            sources,
            digest_color: default_digest_color(),
        }
    }
}

impl Config {
    /// Read a roster from a YAML file.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = tokio::fs::read_to_string(path.as_ref()).await?;
        let config: Config = serde_yaml::from_str(&text)?;
        info!(sources = config.sources.len(), active = config.active.len(), "Loaded roster");
        Ok(config)
    }

    /// Load `path` when given, otherwise use the built-in roster.
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p).await,
            None => Ok(Self::default()),
        }
    }

    /// Restrict the active list to `only`, keeping the current run order.
    ///
    /// Every requested id must exist in the roster.
    pub fn restrict_to(&mut self, only: &[String]) -> Result<()> {
        if only.is_empty() {
            return Ok(());
        }
        for id in only {
            if !self.sources.iter().any(|s| &s.id == id) {
                return Err(Error::UnknownSource(id.clone()));
            }
        }
        let wanted: HashSet<&String> = only.iter().collect();
        let mut active: Vec<String> = self
            .active
            .iter()
            .filter(|id| wanted.contains(id))
            .cloned()
            .collect();
        for id in only {
            if !active.contains(id) {
                active.push(id.clone());
            }
        }
        self.active = active;
        Ok(())
    }

    /// Check the roster before anything is fetched.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for source in &self.sources {
            if source.id.trim().is_empty() {
                return Err(Error::Config("source with empty id".into()));
            }
            if source.id.contains('|') {
                return Err(Error::Config(format!("source id {:?} contains '|'", source.id)));
            }
            if !seen.insert(source.id.as_str()) {
                return Err(Error::Config(format!("duplicate source id {:?}", source.id)));
            }
            Url::parse(&source.url)
                .map_err(|e| Error::Config(format!("source {:?} has invalid url: {}", source.id, e)))?;
            if !is_hex_color(&source.color) {
                return Err(Error::Config(format!(
                    "source {:?} has invalid color {:?}",
                    source.id, source.color
                )));
            }
        }
        if !is_hex_color(&self.digest_color) {
            return Err(Error::Config(format!("invalid digest color {:?}", self.digest_color)));
        }
        for id in &self.active {
            if !seen.contains(id.as_str()) {
                return Err(Error::UnknownSource(id.clone()));
            }
        }
        Ok(())
    }
}

pub(crate) fn is_hex_color(color: &str) -> bool {
    color.len() == 6 && color.chars().all(|c| c.is_ascii_hexdigit())
}
