use rps_core::{Choice, Outcome};

/// Decide a round from the user's point of view
pub fn resolve(user: Choice, computer: Choice) -> Outcome {
    if user == computer {
        Outcome::Tie
    } else if user.beats() == computer {
        Outcome::User
    } else {
        Outcome::Computer
    }
}
