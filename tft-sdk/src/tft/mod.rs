pub mod matches;
pub mod summoner;
