mod dialects;
mod procedures;
mod statements;
