// Build script for ticket-desk
//
// The SQL migrations are embedded at compile time by `sqlx::migrate!`, so a
// change to any file under `migrations/` must trigger a rebuild.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
    println!("cargo:rerun-if-changed=templates");

    // Rerun this script if it changes
    println!("cargo:rerun-if-changed=build.rs");
}
