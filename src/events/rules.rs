//! Rule texts, rendered as Markdown by the frontend.

pub const CHESS: &str = "\
# Chess Tournament Rules

## Format
- Swiss System / Round Robin
- Time Control: To be announced

## Scoring
- Win: 1 point
- Draw: 0.5 points
- Loss: 0 points

## Rules
1. Standard FIDE rules apply
2. Touch-move rule enforced
3. No outside assistance
4. Mobile phones must be switched off

## Placeholder
This section will be updated with complete rules.
";

/// Template for events whose rules have not been published yet
pub fn placeholder(event_name: &str) -> String {
    format!(
        "\
# {event_name} Tournament Rules

## Format
To be announced

## Scoring
To be announced

## Rules
1. Rule 1
2. Rule 2
3. Rule 3

## Placeholder
This section will be updated with complete rules.
"
    )
}
