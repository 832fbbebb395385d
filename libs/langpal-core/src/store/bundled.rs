//! Dataset bundled with the application.

use super::VocabularyStore;
use crate::types::{Language, VocabularyItem};

/// (name, flag, code)
const LANGUAGES: &[(&str, &str, &str)] = &[
    ("English", "🇬🇧", "en"),
    ("Spanish", "🇪🇸", "es"),
    ("German", "🇩🇪", "de"),
    ("Italian", "🇮🇹", "it"),
    ("French", "🇫🇷", "fr"),
    ("Portuguese", "🇵🇹", "pt"),
    ("Russian", "🇷🇺", "ru"),
    ("Chinese", "🇨🇳", "zh"),
    ("Japanese", "🇯🇵", "ja"),
    ("Korean", "🇰🇷", "ko"),
    ("Arabic", "🇸🇦", "ar"),
    ("Hindi", "🇮🇳", "hi"),
    ("Bengali", "🇧🇩", "bn"),
    ("Punjabi", "🇵🇰", "pa"),
    ("Pashto", "🇵🇰", "ps"),
    ("Urdu", "🇵🇰", "ur"),
    ("Tamil", "🇮🇳", "ta"),
    ("Telugu", "🇮🇳", "te"),
    ("Marathi", "🇮🇳", "mr"),
    ("Gujarati", "🇮🇳", "gu"),
    ("Polish", "🇵🇱", "pl"),
    ("Dutch", "🇳🇱", "nl"),
    ("Swedish", "🇸🇪", "sv"),
];

/// (word, translation, pronunciation)
type Entry = (&'static str, &'static str, &'static str);

const ENGLISH: &[Entry] = &[
    ("Hello", "Hello", "həˈləʊ"),
    ("Thank you", "Thank you", "θæŋk juː"),
    ("Goodbye", "Goodbye", "ɡʊdˈbaɪ"),
    ("Please", "Please", "pliːz"),
    ("Yes", "Yes", "jɛs"),
    ("No", "No", "nəʊ"),
    ("Water", "Water", "ˈwɔːtə"),
    ("Food", "Food", "fuːd"),
    ("Friend", "Friend", "frɛnd"),
    ("Love", "Love", "lʌv"),
];

const SPANISH: &[Entry] = &[
    ("Hola", "Hello", "ˈola"),
    ("Gracias", "Thank you", "ˈɡɾasjas"),
    ("Adiós", "Goodbye", "aðiˈos"),
    ("Por favor", "Please", "poɾ faˈβoɾ"),
    ("Sí", "Yes", "si"),
    ("No", "No", "no"),
    ("Agua", "Water", "ˈaɣwa"),
    ("Comida", "Food", "koˈmiða"),
    ("Amigo", "Friend", "aˈmiɣo"),
    ("Amor", "Love", "aˈmoɾ"),
];

const GERMAN: &[Entry] = &[
    ("Hallo", "Hello", "ˈhalo"),
    ("Danke", "Thank you", "ˈdaŋkə"),
    ("Tschüss", "Goodbye", "tʃʏs"),
    ("Bitte", "Please", "ˈbɪtə"),
    ("Ja", "Yes", "ja"),
    ("Nein", "No", "naɪn"),
    ("Wasser", "Water", "ˈvasɐ"),
    ("Essen", "Food", "ˈɛsn̩"),
    ("Freund", "Friend", "fʁɔʏnt"),
    ("Liebe", "Love", "ˈliːbə"),
];

const FRENCH: &[Entry] = &[
    ("Bonjour", "Hello", "bɔ̃ʒuʁ"),
    ("Merci", "Thank you", "mɛʁsi"),
    ("Au revoir", "Goodbye", "o ʁəvwaʁ"),
    ("S’il vous plaît", "Please", "sil vu plɛ"),
    ("Oui", "Yes", "wi"),
    ("Non", "No", "nɔ̃"),
    ("Eau", "Water", "o"),
    ("Nourriture", "Food", "nuʁityʁ"),
    ("Ami", "Friend", "ami"),
    ("Amour", "Love", "amuʁ"),
];

const URDU: &[Entry] = &[
    ("سلام", "Hello", "Salaam"),
    ("شکریہ", "Thank you", "Shukriya"),
    ("خدا حافظ", "Goodbye", "Khuda Hafiz"),
    ("براہ کرم", "Please", "Barah-e-Karam"),
    ("جی ہاں", "Yes", "Ji Haan"),
    ("نہیں", "No", "Nahi"),
    ("پانی", "Water", "Pani"),
    ("کھانا", "Food", "Khana"),
    ("دوست", "Friend", "Dost"),
    ("محبت", "Love", "Mohabbat"),
];

const VOCABULARY: &[(&str, &[Entry])] = &[
    ("en", ENGLISH),
    ("es", SPANISH),
    ("de", GERMAN),
    ("fr", FRENCH),
    ("ur", URDU),
];

pub(super) fn store() -> VocabularyStore {
    let languages = LANGUAGES
        .iter()
        .map(|&(name, flag, code)| Language::new(name, flag, code))
        .collect();

    let vocabulary = VOCABULARY
        .iter()
        .map(|&(code, entries)| (code.to_string(), items(code, entries)))
        .collect();

    VocabularyStore {
        languages,
        vocabulary,
    }
}

/// Ids are the language code followed by the 1-based position.
fn items(code: &str, entries: &[Entry]) -> Vec<VocabularyItem> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, &(word, translation, pronunciation))| {
            VocabularyItem::new(format!("{}{}", code, idx + 1), word, translation)
                .with_pronunciation(pronunciation)
        })
        .collect()
}
