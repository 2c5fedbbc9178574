use crate::signature;

pub fn handle_signatures() {
    println!("{}", signature::supported_signatures_help());
}
