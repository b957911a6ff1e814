//! Shareable-link protocol: the `design` query parameter.
//!
//! The parameter carries base64 of the JSON design summary. On every route or
//! parameter change [`reconcile`] folds it into the store; on every store
//! change [`sync_location`] re-encodes it, dropping the parameter entirely
//! when nothing differs from the defaults.

use crate::config::DESIGN_PARAM;
use crate::error::{DesignError, Result};
use crate::model::{Color, CourtType, DesignState, DesignSummary, ElementType, OverlaysPatch};
use crate::store::{summarize_state, DesignStore};
use crate::taxonomy;
use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Characters escaped by `encodeURIComponent`.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Decoded link content for one court.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourtPatch {
    pub colors: Vec<(ElementType, Color)>,
    pub show_accessories: Option<bool>,
}

/// Decoded `design` parameter: only the keys the link actually carried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignPatch {
    pub courts: BTreeMap<CourtType, CourtPatch>,
    pub overlays: Option<OverlaysPatch>,
}

/// Encode a summary as the `design` parameter value.
pub fn encode_summary(summary: &DesignSummary) -> Result<String> {
    let json = serde_json::to_string(summary)?;
    Ok(STANDARD.encode(json))
}

/// Decode a `design` parameter value.
///
/// Unknown top-level keys and unknown element names are skipped. Anything
/// structurally wrong fails the whole parameter so nothing is half-applied.
pub fn decode_summary(param: &str) -> Result<DesignPatch> {
    // Form-encoded links turn '+' into ' '.
    let param = param.trim().replace(' ', "+");
    let bytes = match STANDARD.decode(&param) {
        Ok(bytes) => bytes,
        Err(err) => URL_SAFE.decode(&param).map_err(|_| err)?,
    };
    let text = String::from_utf8(bytes)?;
    let value: Value = serde_json::from_str(&text)?;
    let Value::Object(root) = value else {
        return Err(DesignError::invalid_design("expected a JSON object"));
    };

    let mut patch = DesignPatch::default();
    for (key, entry) in &root {
        if key == "overlays" {
            let overlays: OverlaysPatch = serde_json::from_value(entry.clone())?;
            patch.overlays = Some(overlays);
        } else if let Ok(court) = key.parse::<CourtType>() {
            patch.courts.insert(court, decode_court(court, entry)?);
        } else {
            debug!("Ignoring unknown design key '{}'", key);
        }
    }
    Ok(patch)
}

fn decode_court(court: CourtType, entry: &Value) -> Result<CourtPatch> {
    let obj = entry
        .as_object()
        .ok_or_else(|| DesignError::invalid_design(format!("{} must be an object", court)))?;

    let mut patch = CourtPatch::default();
    if let Some(colors) = obj.get("colors") {
        let colors = colors.as_object().ok_or_else(|| {
            DesignError::invalid_design(format!("{}.colors must be an object", court))
        })?;
        patch.colors = decode_colors(court, colors)?;
    }
    match obj.get("showAccessories") {
        None | Some(Value::Null) => {}
        Some(Value::Bool(show)) => patch.show_accessories = Some(*show),
        Some(_) => {
            return Err(DesignError::invalid_design(format!(
                "{}.showAccessories must be a boolean",
                court
            )))
        }
    }
    Ok(patch)
}

fn decode_colors(
    court: CourtType,
    colors: &Map<String, Value>,
) -> Result<Vec<(ElementType, Color)>> {
    let mut decoded = Vec::with_capacity(colors.len());
    for (name, color) in colors {
        let code = color.as_str().ok_or_else(|| {
            DesignError::invalid_design(format!("{}.colors.{} must be a string", court, name))
        })?;
        match name.parse::<ElementType>() {
            Ok(element) => decoded.push((element, Color::new(code))),
            Err(_) => debug!(
                "Ignoring unknown element {} ({}) for {}",
                name,
                taxonomy::label_for_name(name),
                court
            ),
        }
    }
    Ok(decoded)
}

/// Apply a decoded link to the store.
pub fn apply_patch(store: &mut DesignStore, patch: &DesignPatch) {
    for (&court, court_patch) in &patch.courts {
        for (element, color) in &court_patch.colors {
            store.update_court_color(court, *element, color.clone());
        }
        if let Some(show) = court_patch.show_accessories {
            store.set_accessories(court, show);
        }
    }
    if let Some(overlays) = patch.overlays {
        store.set_overlays(overlays);
    }
}

/// Whether a summary differs from the untouched defaults.
///
/// Colors are compared against the taxonomy again, so a summary that still
/// carries default-valued entries does not count as customized.
pub fn has_customizations(summary: &DesignSummary) -> bool {
    if summary.overlays.any() {
        return true;
    }
    summary.courts.values().any(|court| {
        !court.show_accessories
            || court
                .colors
                .iter()
                .any(|(element, color)| *color != taxonomy::default_color(*element))
    })
}

/// Fold the location into the store: apply (or clear) the design, select the
/// route's court, and snap the selected element to one valid for that court.
pub fn reconcile(store: &mut DesignStore, location: &Location) {
    match location.design.as_deref() {
        Some(param) => match decode_summary(param) {
            Ok(patch) => apply_patch(store, &patch),
            Err(err) => {
                warn!("Failed to parse design from URL: {}", err);
                store.reset(true);
            }
        },
        None => store.reset(true),
    }

    store.select_court(location.court);

    let valid = taxonomy::elements_for_court(location.court);
    let current = store.state().selected_element;
    let element = if valid.contains(&current) {
        current
    } else {
        debug!("Selected element {} is not on the {} court", current, location.court);
        valid[0]
    };
    // Also re-resolves selected_color for a still-valid element.
    store.select_element(element);
}

/// Re-encode the state into the location's `design` parameter.
pub fn sync_location(location: &mut Location, state: &DesignState) -> Result<()> {
    let summary = summarize_state(state);
    location.design = if has_customizations(&summary) {
        Some(encode_summary(&summary)?)
    } else {
        None
    };
    Ok(())
}

/// Full shareable link for the state, customized or not.
pub fn share_url(origin: &str, state: &DesignState) -> Result<String> {
    let location = Location {
        court: state.selected_court,
        design: Some(encode_summary(&summarize_state(state))?),
    };
    Ok(format!("{}{}", origin.trim_end_matches('/'), location))
}

/// The designer's address: a court route plus the optional `design` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub court: CourtType,
    pub design: Option<String>,
}

impl Location {
    /// Location of a court with no design parameter.
    pub fn court(court: CourtType) -> Self {
        Self {
            court,
            design: None,
        }
    }

    /// Parse `/tennis?design=...`, optionally prefixed by scheme and host.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let rest = match input.find("://") {
            Some(idx) => {
                let after = &input[idx + 3..];
                after.find('/').map_or("/", |slash| &after[slash..])
            }
            None => input,
        };
        let rest = rest.split('#').next().unwrap_or_default();
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

        let segment = path.trim_matches('/');
        let court = CourtType::from_str(segment).map_err(|_| DesignError::UnknownRoute {
            path: path.to_string(),
        })?;

        let design = query
            .split('&')
            .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
            .find(|(key, _)| percent_decode_str(key).decode_utf8_lossy() == DESIGN_PARAM)
            .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned());

        Ok(Self { court, design })
    }

    /// Path and query, as shown in the address bar.
    pub fn href(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.court)?;
        if let Some(design) = &self.design {
            write!(
                f,
                "?{}={}",
                DESIGN_PARAM,
                utf8_percent_encode(design, URI_COMPONENT)
            )?;
        }
        Ok(())
    }
}

impl FromStr for Location {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Overlays;
    use pretty_assertions::assert_eq;

    fn navy() -> Color {
        Color::new("#111f2c")
    }

    fn encode_json(json: &str) -> String {
        STANDARD.encode(json)
    }

    #[test]
    fn test_default_state_has_no_customizations() {
        let store = DesignStore::new();
        assert!(!has_customizations(&store.summarize()));
    }

    #[test]
    fn test_accessories_toggle_customization() {
        let mut store = DesignStore::new();
        store.set_accessories(CourtType::Pickleball, false);
        assert!(has_customizations(&store.summarize()));
        store.set_accessories(CourtType::Pickleball, true);
        assert!(!has_customizations(&store.summarize()));
    }

    #[test]
    fn test_overlay_is_customization() {
        let mut store = DesignStore::new();
        store.set_overlays(OverlaysPatch::only(CourtType::Tennis, true));
        assert!(has_customizations(&store.summarize()));
    }

    #[test]
    fn test_predicate_rechecks_defaults() {
        let mut summary = DesignStore::new().summarize();
        summary.courts.get_mut(&CourtType::Basketball).unwrap().colors.insert(
            ElementType::Lines,
            taxonomy::default_color(ElementType::Lines),
        );
        assert!(!has_customizations(&summary));

        summary
            .courts
            .get_mut(&CourtType::Basketball)
            .unwrap()
            .colors
            .insert(ElementType::Lines, navy());
        assert!(has_customizations(&summary));
    }

    #[test]
    fn test_round_trip_through_fresh_store() {
        let mut source = DesignStore::new();
        source.update_court_color(CourtType::Basketball, ElementType::ThreePoint, navy());
        source.update_court_color(
            CourtType::Pickleball,
            ElementType::PickleballKitchen,
            Color::new("#ec6661"),
        );
        source.set_accessories(CourtType::Tennis, false);
        source.set_overlays(OverlaysPatch::only(CourtType::Pickleball, true));

        let encoded = encode_summary(&source.summarize()).unwrap();
        let mut target = DesignStore::new();
        apply_patch(&mut target, &decode_summary(&encoded).unwrap());

        for court in CourtType::ALL {
            for &element in taxonomy::elements_for_court(court) {
                assert_eq!(target.color(court, element), source.color(court, element));
            }
        }
        assert_eq!(target.state().overlays(), source.state().overlays());
        assert_eq!(target.summarize(), source.summarize());
    }

    #[test]
    fn test_decode_ignores_unknown_keys() {
        let param = encode_json(
            r##"{"tennis":{"colors":{"tennis-lines":"#111f2c","net-posts":"#000000"},"showAccessories":true},"version":3,"overlays":{"basketball":true}}"##,
        );
        let patch = decode_summary(&param).unwrap();
        assert_eq!(
            patch.courts[&CourtType::Tennis].colors,
            vec![(ElementType::TennisLines, navy())]
        );
        assert_eq!(patch.overlays, Some(OverlaysPatch::only(CourtType::Basketball, true)));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_summary("not base64 at all!").is_err());
        assert!(decode_summary(&encode_json("[1,2,3]")).is_err());
        assert!(decode_summary(&encode_json("{not json")).is_err());
        let bad_color = encode_json(r#"{"tennis":{"colors":{"tennis-lines":7}}}"#);
        assert!(decode_summary(&bad_color).is_err());
        assert!(decode_summary(&encode_json(r#"{"overlays":{"tennis":"yes"}}"#)).is_err());
    }

    #[test]
    fn test_decode_accepts_url_safe_alphabet() {
        let json = r##"{"overlays":{"tennis":true},"basketball":{"colors":{"lines":"#fbfbff"}}}"##;
        let param = URL_SAFE.encode(json);
        let patch = decode_summary(&param).unwrap();
        assert_eq!(patch.overlays, Some(OverlaysPatch::only(CourtType::Tennis, true)));
    }

    #[test]
    fn test_decoded_foreign_element_is_not_written() {
        let param = encode_json(r##"{"tennis":{"colors":{"lines":"#111f2c"},"showAccessories":true}}"##);
        let mut store = DesignStore::new();
        apply_patch(&mut store, &decode_summary(&param).unwrap());
        assert!(!store.state().design_state.tennis.elements.contains_key(&ElementType::Lines));
    }

    #[test]
    fn test_reconcile_without_param_resets_but_keeps_route() {
        let mut store = DesignStore::new();
        store.update_court_color(CourtType::Tennis, ElementType::TennisLines, navy());
        reconcile(&mut store, &Location::court(CourtType::Tennis));
        assert_eq!(store.state(), &DesignState::with_court(CourtType::Tennis));
    }

    #[test]
    fn test_reconcile_malformed_param_resets() {
        let mut store = DesignStore::new();
        store.set_accessories(CourtType::Basketball, false);
        let location = Location {
            court: CourtType::Pickleball,
            design: Some("%%%garbage".to_string()),
        };
        reconcile(&mut store, &location);
        assert_eq!(store.state(), &DesignState::with_court(CourtType::Pickleball));
    }

    #[test]
    fn test_reconcile_snaps_invalid_element() {
        let mut state = DesignState::default();
        state.selected_element = ElementType::TennisLines;
        let mut store = DesignStore::with_state(state);
        store.update_court_color(CourtType::Basketball, ElementType::BaseBackground, navy());
        let design = encode_summary(&store.summarize()).unwrap();

        reconcile(
            &mut store,
            &Location {
                court: CourtType::Basketball,
                design: Some(design),
            },
        );
        assert_eq!(store.state().selected_element, ElementType::BaseBackground);
        assert_eq!(store.state().selected_color, navy());
    }

    #[test]
    fn test_reconcile_refreshes_color_of_valid_element() {
        let mut store = DesignStore::new();
        store.select_element(ElementType::BaseBackground);
        store.select_court(CourtType::Tennis);
        let mut source = DesignStore::new();
        source.update_court_color(CourtType::Tennis, ElementType::BaseBackground, navy());
        let location = Location {
            court: CourtType::Tennis,
            design: Some(encode_summary(&source.summarize()).unwrap()),
        };
        reconcile(&mut store, &location);
        assert_eq!(store.state().selected_element, ElementType::BaseBackground);
        assert_eq!(store.state().selected_color, navy());
    }

    #[test]
    fn test_sync_location_clears_param_at_defaults() {
        let mut location = Location {
            court: CourtType::Tennis,
            design: Some("stale".to_string()),
        };
        sync_location(&mut location, &DesignState::default()).unwrap();
        assert_eq!(location.design, None);
        assert_eq!(location.href(), "/tennis");
    }

    #[test]
    fn test_sync_location_sets_param_when_customized() {
        let mut store = DesignStore::new();
        store.set_overlays(OverlaysPatch::only(CourtType::Tennis, true));
        let mut location = Location::court(CourtType::Basketball);
        sync_location(&mut location, store.state()).unwrap();
        let design = location.design.clone().unwrap();
        let patch = decode_summary(&design).unwrap();
        assert_eq!(patch.overlays, Some(OverlaysPatch::from(Overlays {
            basketball: false,
            tennis: true,
            pickleball: false,
        })));
    }

    #[test]
    fn test_location_parse_and_display() {
        let url = "https://courts.example.com/pickleball?x=1&design=ab%2Bc%2F%3D%3D#top";
        let location = Location::parse(url).unwrap();
        assert_eq!(location.court, CourtType::Pickleball);
        assert_eq!(location.design.as_deref(), Some("ab+c/=="));
        assert_eq!(location.href(), "/pickleball?design=ab%2Bc%2F%3D%3D");

        assert_eq!(Location::parse("/tennis/").unwrap(), Location::court(CourtType::Tennis));
        assert!(matches!(
            Location::parse("/"),
            Err(DesignError::UnknownRoute { .. })
        ));
        assert!(Location::parse("/golf?design=x").is_err());
    }

    #[test]
    fn test_share_url() {
        let state = DesignState::with_court(CourtType::Tennis);
        let url = share_url("https://courts.example.com/", &state).unwrap();
        assert!(url.starts_with("https://courts.example.com/tennis?design="));
        let location = Location::parse(&url).unwrap();
        let patch = decode_summary(location.design.as_deref().unwrap()).unwrap();
        assert_eq!(patch.courts.len(), 3);
    }
}
