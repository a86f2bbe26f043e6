pub mod assignment_serializer;

pub use assignment_serializer::AssignmentSerialize;
