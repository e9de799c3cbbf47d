use std::path::Path;

use mydict_types::{DictionaryEntry, Meaning};
use slint::{Image, ModelRc, SharedString, VecModel};

use crate::{DictCard, MeaningRow};

pub fn to_card(entry: &DictionaryEntry) -> DictCard {
    let meanings: Vec<MeaningRow> = entry.meanings.iter().map(to_meaning_row).collect();
    let avatar = entry.avatar_url.as_deref().and_then(load_avatar);

    DictCard {
        word: entry.word.as_str().into(),
        definition: entry.definition.as_str().into(),
        pronunciation: entry.pronunciation.as_deref().unwrap_or_default().into(),
        audio_url: entry.audio_url.as_deref().unwrap_or_default().into(),
        part_of_speech: entry.part_of_speech.as_deref().unwrap_or_default().into(),
        has_avatar: avatar.is_some(),
        avatar: avatar.unwrap_or_default(),
        initial: avatar_initial(entry).into(),
        placeholder: entry.is_placeholder(),
        meanings: ModelRc::new(VecModel::from(meanings)),
    }
}

/// Avatars are local image files; anything else falls back to the initial
fn load_avatar(path: &str) -> Option<Image> {
    match Image::load_from_path(Path::new(path)) {
        Ok(image) => Some(image),
        Err(_) => {
            tracing::debug!("[SLINT] Avatar '{}' not loadable, showing initial", path);
            None
        }
    }
}

/// First letter of the word, only for entries that carry an avatar
fn avatar_initial(entry: &DictionaryEntry) -> String {
    if entry.avatar_url.is_none() {
        return String::new();
    }

    entry
        .word
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

fn to_meaning_row(meaning: &Meaning) -> MeaningRow {
    let examples: Vec<SharedString> = meaning
        .examples
        .iter()
        .map(|e| SharedString::from(e.as_str()))
        .collect();

    MeaningRow {
        definition: meaning.definition.as_str().into(),
        examples: ModelRc::new(VecModel::from(examples)),
    }
}

pub fn to_cards(entries: &[DictionaryEntry]) -> ModelRc<DictCard> {
    let cards: Vec<DictCard> = entries.iter().map(to_card).collect();
    ModelRc::new(VecModel::from(cards))
}
