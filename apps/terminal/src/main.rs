fn main() -> anyhow::Result<()> {
    langpal_terminal::run()
}
