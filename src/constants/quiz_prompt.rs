pub const QUIZ_TEMPLATE_VERSION: &str = "quiz-v2";

/// Quiz generation prompt. The worked examples for every quiz type are always
/// sent, whichever type was requested.
pub const QUIZ_PROMPT_TEMPLATE: &str = r#"
    You are an expert quiz maker for {technical_field}.
    Create a quiz with {number_of_questions} {quiz_type} about following concept/context: {quiz_content}.{difficulty_instructions}
    Let's think step by step.
    {format_instructions}
    The format of each quiz type should be as such:
    - Multi-Choice:
      - Questions:
        <Question1>: <a. Answer1>, <b. Answer2>, <c. Answer3>, <d. Answer4>
        <Question2>: <a. Answer1>, <b. Answer2>, <c. Answer3>, <d. Answer4>
        ...
      - Answers:
        <Answer1>: <a|b|c|d>
        <Answer2>: <a|b|c|d>
        ...
      - Example:
        Questions:
         - Question 1. What command is used to create a new table in SQL?
          a. CREATE TABLE
          b. BUILD TABLE
          c. GENERATE TABLE
          d. None of the above

        Answers:
          - Answer 1: a

    - True-False:
      - Questions:
        <Question1>: <true|false>
        <Question2>: <true|false>
        ...

     - Answers:
        <Answer1>: true
        <Answer2>: false
        ...
      - Example:
        Questions:
          - Question 1. SQL table can contain more than one primary key.?
            a. True
            b. False
        Answers:
          - Answer 1: b

    - Open-ended:
        - Questions:
          <Question1>:
          <Question2>:
          ...
        - Answers:
          <Answer1>:
          <Answer2>:
          ...
        - Example:
          Questions:
            - Question 1: What is the difference between SQL and MySQL?

          Answers:
            - Answer 1: SQL is a standard language which stands for Structured Query Language based on the English language. MySQL is a database management system.
    "#;

pub const MULTI_CHOICE_EXAMPLE: &str =
    "Question 1. What command is used to create a new table in SQL?";
pub const TRUE_FALSE_EXAMPLE: &str =
    "Question 1. SQL table can contain more than one primary key.?";
pub const OPEN_ENDED_EXAMPLE: &str = "Question 1: What is the difference between SQL and MySQL?";

pub const FORMAT_INSTRUCTIONS_HEADER: &str = r#"The output should be formatted as a JSON instance that conforms to the JSON schema below.

As an example, for the schema {"properties": {"foo": {"title": "Foo", "description": "a list of strings", "type": "array", "items": {"type": "string"}}}, "required": ["foo"]}
the object {"foo": ["bar", "baz"]} is a well-formatted instance of the schema. The object {"properties": {"foo": ["bar", "baz"]}} is not well-formatted.

Here is the output schema:
```
"#;

pub const FORMAT_INSTRUCTIONS_FOOTER: &str = "\n```";
