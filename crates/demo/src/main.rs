fn main() -> anyhow::Result<()> {
    liskov_observability::init();

    liskov_demo::run()
}
