// Helpers de texto compartidos

/// Corta `text` a `max_chars` caracteres y añade "..."
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Un id como segmento de ruta ("a/b c" -> "a%2Fb%20c")
pub fn path_segment(id: &str) -> String {
    // byte_serialize codifica '+' literal como %2B: los '+' que quedan son espacios
    url::form_urlencoded::byte_serialize(id.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Nombre de archivo seguro: alfanumérico en minúsculas, resto como '_'
/// La extensión se conserva para que el backend detecte el formato
pub fn sanitize_filename(filename: &str) -> String {
    let (stem, ext) = match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (filename, None),
    };

    let clean = |part: &str| -> String {
        part.chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
            .collect()
    };

    match ext {
        Some(ext) => format!("{}.{}", clean(stem), clean(ext)),
        None => clean(stem),
    }
}
