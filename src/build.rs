// build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/icon.ico");    // multi-size .ico
        res.set("FileDescription", "Candidate Sentiment Monitor");
        res.compile().unwrap();
    }
}
