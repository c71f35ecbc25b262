/// ## Terminal seen from the machine
///
/// `PRINT`, `INPUT`, `LIST` and error reports go through here so the
/// machine never touches stdin or stdout itself.
pub trait Console {
    /// Writes one line. The console supplies the line ending.
    fn print_line(&mut self, s: &str);

    /// Blocks until a line of input is available.
    fn read_line(&mut self, prompt: &str) -> String;

    /// Polled between program statements. Returning true breaks a `RUN`.
    fn interrupted(&mut self) -> bool {
        false
    }
}
