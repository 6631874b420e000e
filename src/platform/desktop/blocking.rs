/// Runs store work from a UI handler. Desktop stores are local, so the
/// call happens inline and the result comes straight back.
pub fn run_blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T,
{
    f()
}
