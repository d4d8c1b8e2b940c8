/// A buffer of `len` spaces for OpenGL to write a string into. `len` is whatever GL reported as
/// the length, which already counts the terminator.
pub fn create_ws_buffer_with_len(len: usize) -> Vec<u8> {
    vec![b' '; len]
}

/// Turns a buffer OpenGL has written `written` bytes into back into a Rust string. Anything past
/// what was written (the filler spaces, the terminator) is dropped.
pub fn string_from_gl_buffer(mut buffer: Vec<u8>, written: usize) -> String {
    buffer.truncate(written);
    String::from_utf8_lossy(&buffer).trim_end().to_owned()
}

/// Splits an active array variable's reported name (`lights[0]`) into its base name.
pub fn array_base_name(name: &str) -> &str {
    name.strip_suffix("[0]").unwrap_or(name)
}
