use idle_tycoon::rocket_initialize;

#[rocket::launch]
fn rocket() -> _ {
    rocket_initialize()
}
