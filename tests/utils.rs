use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};

use lopdf::{Document, EncryptionState, EncryptionVersion, Object, Permissions, Stream, StringFormat, dictionary};
use pdfpwd::PasswordSource;

/// Answers prompts from a fixed list and remembers what it was asked.
#[allow(dead_code)]
pub struct ScriptedPasswords {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedPasswords {
    pub fn new(answers: &[&str]) -> Self {
        ScriptedPasswords {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            prompts: Vec::new(),
        }
    }
}

impl PasswordSource for ScriptedPasswords {
    fn read_password(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_owned());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted password left"))
    }
}

/// One page showing `text` in Helvetica.
pub fn text_document(text: &str) -> Document {
    let mut doc = Document::with_version("1.5");
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String(vec![1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16], StringFormat::Literal),
            Object::String(vec![16u8, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1], StringFormat::Literal),
        ]),
    );

    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => Object::Reference(font_id),
        },
    });
    let content = format!("BT\n/F1 12 Tf\n100 700 Td\n({text}) Tj\nET\n");
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "MediaBox" => vec![Object::Integer(0), Object::Integer(0), Object::Integer(612), Object::Integer(792)],
        "Resources" => Object::Reference(resources_id),
        "Contents" => Object::Reference(content_id),
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc
}

/// Writes an unprotected one-page PDF to `dir/name`.
#[allow(dead_code)]
pub fn plain_pdf(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    text_document(text).save(&path).unwrap();
    path
}

/// Writes a one-page PDF to `dir/name` that opens only with `user_password`.
#[allow(dead_code)]
pub fn protected_pdf(dir: &Path, name: &str, text: &str, user_password: &str) -> PathBuf {
    let mut doc = text_document(text);
    let version = EncryptionVersion::V2 {
        document: &doc,
        owner_password: "owner",
        user_password,
        key_length: 128,
        permissions: Permissions::all(),
    };
    let state = EncryptionState::try_from(version).unwrap();
    doc.encrypt(&state).unwrap();

    let path = dir.join(name);
    doc.save(&path).unwrap();
    path
}

/// Text of every page of the document at `path`, loaded without a password.
#[allow(dead_code)]
pub fn extract_text(path: &Path) -> String {
    let doc = Document::load(path).unwrap();
    assert!(!doc.is_encrypted(), "{} should not need a password", path.display());
    let pages: Vec<u32> = doc.get_pages().keys().cloned().collect();
    doc.extract_text(&pages).unwrap()
}
