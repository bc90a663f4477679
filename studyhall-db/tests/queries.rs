use studyhall_db::*;
use studyhall_library::{Author, Book, Comment, Genre};

fn populated() -> studyhall_db::Connection {
    let conn = open_memory().unwrap();
    seed_demo(&conn).unwrap();
    conn
}

#[test]
fn list_authors_returns_all_in_id_order() {
    let conn = populated();
    let authors = list_authors(&conn).unwrap();
    assert_eq!(authors.len(), 3);
    assert_eq!(authors[0].full_name, "Author_1");
    assert!(authors.windows(2).all(|w| w[0].id < w[1].id));
}

#[test]
fn find_author_returns_none_for_missing_id() {
    let conn = populated();
    assert!(find_author(&conn, 1).unwrap().is_some());
    assert!(find_author(&conn, 999).unwrap().is_none());
}

#[test]
fn find_genres_by_ids_skips_unknown_ids() {
    let conn = populated();
    let genres = find_genres_by_ids(&conn, &[2, 3, 999]).unwrap();
    let names: Vec<_> = genres.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Genre_2", "Genre_3"]);

    assert!(find_genres_by_ids(&conn, &[]).unwrap().is_empty());
}

#[test]
fn list_books_attaches_authors_and_genres() {
    let conn = populated();
    let books = list_books(&conn).unwrap();
    assert_eq!(books.len(), 3);

    let first = &books[0];
    assert_eq!(first.title, "BookTitle_1");
    assert_eq!(first.author.full_name, "Author_1");
    let genre_names: Vec<_> = first.genres.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(genre_names, vec!["Genre_1", "Genre_2"]);
}

#[test]
fn find_book_returns_full_aggregate() {
    let conn = populated();
    let books = list_books(&conn).unwrap();
    let id = books[2].id;

    let book = find_book(&conn, id).unwrap().unwrap();
    assert_eq!(book.title, "BookTitle_3");
    assert_eq!(book.author.full_name, "Author_3");
    assert_eq!(book.genres.len(), 2);

    assert!(find_book(&conn, 12345).unwrap().is_none());
}

#[test]
fn book_without_genres_lists_with_empty_genres() {
    let conn = open_memory().unwrap();
    let author = save_author(&conn, &Author::new("Solo")).unwrap();
    save_book(&conn, &Book::new("Plain", author, vec![])).unwrap();

    let books = list_books(&conn).unwrap();
    assert_eq!(books.len(), 1);
    assert!(books[0].genres.is_empty());
}

#[test]
fn comments_for_book_returns_only_that_books_comments() {
    let conn = populated();
    let books = list_books(&conn).unwrap();

    let comments = comments_for_book(&conn, books[0].id).unwrap();
    assert_eq!(comments.len(), 2);
    assert!(comments.iter().all(|c| c.book_id == books[0].id));

    assert!(comments_for_book(&conn, 999).unwrap().is_empty());
}

#[test]
fn find_comment_round_trips_text() {
    let conn = open_memory().unwrap();
    let author = save_author(&conn, &Author::new("A")).unwrap();
    let book = save_book(&conn, &Book::new("B", author, vec![])).unwrap();
    let saved = save_comment(&conn, &Comment::new("a fine read", book.id)).unwrap();

    let found = find_comment(&conn, saved.id).unwrap().unwrap();
    assert_eq!(found.text, "a fine read");
    assert_eq!(found.book_id, book.id);
}

#[test]
fn library_stats_counts_every_table() {
    let conn = populated();
    let stats = library_stats(&conn).unwrap();
    assert_eq!(stats.authors, 3);
    assert_eq!(stats.genres, 6);
    assert_eq!(stats.books, 3);
    assert_eq!(stats.genre_links, 6);
    assert_eq!(stats.comments, 6);

    let genre = save_genre(&conn, &Genre::new("Extra")).unwrap();
    assert!(genre.id > 6);
    assert_eq!(library_stats(&conn).unwrap().genres, 7);
}
