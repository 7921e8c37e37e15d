use rocket::launch;

#[launch]
fn rocket() -> _ {
    places_web::server::rocket()
}
