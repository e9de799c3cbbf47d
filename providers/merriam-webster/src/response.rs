use mydict_source::LookupError;
use mydict_types::{DictionaryEntry, Meaning};
use serde::Deserialize;
use serde_json::Value;

use crate::markup::strip_markup;

// JSON structures for the collegiate-style entry format
#[derive(Debug, Deserialize)]
struct Record {
    #[serde(default)]
    meta: Option<Meta>,
    #[serde(default)]
    hwi: Option<HeadwordInfo>,
    #[serde(default)]
    fl: Option<String>,
    #[serde(default)]
    shortdef: Vec<String>,
    #[serde(default)]
    def: Vec<DefinitionSection>,
}

#[derive(Debug, Deserialize)]
struct Meta {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HeadwordInfo {
    #[serde(default)]
    prs: Vec<Pronunciation>,
}

#[derive(Debug, Deserialize)]
struct Pronunciation {
    #[serde(default)]
    mw: Option<String>,
    #[serde(default)]
    sound: Option<Sound>,
}

#[derive(Debug, Deserialize)]
struct Sound {
    #[serde(default)]
    audio: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DefinitionSection {
    #[serde(default)]
    sseq: Vec<Vec<Value>>,
}

/// Decode an API response body into entries.
///
/// Records are taken from the front of the list for as long as they carry a
/// short definition, so an unusable first record yields no entries at all.
/// Non-JSON bodies are errors; JSON of the wrong shape (including the list
/// of spelling suggestions returned for unknown words) is simply empty.
pub fn parse_response(
    body: &str,
    word: &str,
    audio_host: &str,
) -> Result<Vec<DictionaryEntry>, LookupError> {
    let value: Value = serde_json::from_str(body)?;

    let Value::Array(items) = value else {
        tracing::debug!("Response for '{}' is not a list", word);
        return Ok(vec![]);
    };

    let entries: Vec<DictionaryEntry> = items
        .into_iter()
        .map_while(|item| {
            let record: Record = serde_json::from_value(item).ok()?;
            record.into_entry(word, audio_host)
        })
        .collect();

    tracing::debug!("Parsed {} records for '{}'", entries.len(), word);
    Ok(entries)
}

impl Record {
    fn into_entry(self, word: &str, audio_host: &str) -> Option<DictionaryEntry> {
        let definition = self.shortdef.first()?.clone();

        let headword = self
            .meta
            .and_then(|m| m.id)
            .map(|id| strip_homograph(&id).to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| word.to_string());

        let first_pr = self.hwi.and_then(|h| h.prs.into_iter().next());
        let (pronunciation, audio_url) = match first_pr {
            Some(pr) => (
                pr.mw,
                pr.sound
                    .and_then(|s| s.audio)
                    .and_then(|audio| audio_url(audio_host, &audio)),
            ),
            None => (None, None),
        };

        let sense_examples = collect_sense_examples(&self.def);
        let meanings = self
            .shortdef
            .iter()
            .enumerate()
            .map(|(i, text)| Meaning {
                definition: text.clone(),
                examples: sense_examples.get(i).cloned().unwrap_or_default(),
            })
            .collect();

        Some(DictionaryEntry {
            word: headword,
            definition,
            pronunciation,
            audio_url,
            part_of_speech: self.fl,
            avatar_url: None,
            meanings,
        })
    }
}

/// `{host}/{first char}/{file}.mp3`
pub fn audio_url(host: &str, audio: &str) -> Option<String> {
    let first = audio.chars().next()?;
    Some(format!(
        "{}/{}/{}.mp3",
        host.trim_end_matches('/'),
        first,
        audio
    ))
}

/// Homograph ids look like `bank:2`
fn strip_homograph(id: &str) -> &str {
    id.split(':').next().unwrap_or(id)
}

/// Example sentences per sense, in sense order.
///
/// Walks `def[*].sseq[*][*][1].dt` and keeps the `"vis"` items of each sense.
fn collect_sense_examples(def: &[DefinitionSection]) -> Vec<Vec<String>> {
    let mut senses = Vec::new();

    for section in def {
        for sense_group in &section.sseq {
            for sense in sense_group {
                let Some(dt) = sense.get(1).and_then(|body| body.get("dt")) else {
                    continue;
                };
                senses.push(visual_examples(dt));
            }
        }
    }

    senses
}

fn visual_examples(dt: &Value) -> Vec<String> {
    let Some(items) = dt.as_array() else {
        return vec![];
    };

    items
        .iter()
        .filter(|item| item.get(0).and_then(Value::as_str) == Some("vis"))
        .filter_map(|item| item.get(1).and_then(Value::as_array))
        .flatten()
        .filter_map(|vis| vis.get("t").and_then(Value::as_str))
        .map(strip_markup)
        .filter(|text| !text.is_empty())
        .collect()
}
