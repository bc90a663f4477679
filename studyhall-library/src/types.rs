//! Data model types for the library catalog.
//!
//! These mirror the relational schema: `authors`, `genres`, `books` (one
//! required author, many genres via a join table), and `comments` (one
//! required book). An `id` of 0 marks an entity that has not been
//! persisted yet; saving it performs an insert and assigns a real id.

use std::fmt;

/// A book author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub full_name: String,
}

impl Author {
    /// A not-yet-persisted author.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            full_name: full_name.into(),
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id: {}, FullName: {}", self.id, self.full_name)
    }
}

/// A book genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

impl Genre {
    /// A not-yet-persisted genre.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id: {}, Name: {}", self.id, self.name)
    }
}

/// A book with its required author and any number of genres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: Author,
    pub genres: Vec<Genre>,
}

impl Book {
    /// A not-yet-persisted book.
    pub fn new(title: impl Into<String>, author: Author, genres: Vec<Genre>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            author,
            genres,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let genres: Vec<String> = self.genres.iter().map(|g| format!("{{{g}}}")).collect();
        write!(
            f,
            "Id: {}, title: {}, author: {{{}}}, genres: [{}]",
            self.id,
            self.title,
            self.author,
            genres.join(", "),
        )
    }
}

/// A free-form comment attached to a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub book_id: i64,
}

impl Comment {
    /// A not-yet-persisted comment on the given book.
    pub fn new(text: impl Into<String>, book_id: i64) -> Self {
        Self {
            id: 0,
            text: text.into(),
            book_id,
        }
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {}, text: {}, bookId: {}",
            self.id, self.text, self.book_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_rendering_includes_author_and_genres() {
        let book = Book {
            id: 3,
            title: "Roadside Picnic".to_string(),
            author: Author {
                id: 2,
                full_name: "Arkady Strugatsky".to_string(),
            },
            genres: vec![
                Genre {
                    id: 1,
                    name: "Science Fiction".to_string(),
                },
                Genre {
                    id: 4,
                    name: "Novel".to_string(),
                },
            ],
        };
        assert_eq!(
            book.to_string(),
            "Id: 3, title: Roadside Picnic, author: {Id: 2, FullName: Arkady Strugatsky}, \
             genres: [{Id: 1, Name: Science Fiction}, {Id: 4, Name: Novel}]",
        );
    }

    #[test]
    fn new_entities_start_unpersisted() {
        assert_eq!(Author::new("A").id, 0);
        assert_eq!(Genre::new("G").id, 0);
        assert_eq!(Comment::new("text", 7).book_id, 7);
    }
}
