pub const FORM_PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>QUIZ test app</title>
  <style>
    body { font-family: sans-serif; max-width: 760px; margin: 2rem auto; }
    label { display: block; margin-top: 1rem; }
    textarea, input, select { width: 100%; box-sizing: border-box; }
    pre { background: #f4f4f4; padding: 1rem; white-space: pre-wrap; }
    .error { color: #b00020; }
  </style>
</head>
<body>
  <h1>QUIZ test app</h1>
  <form id="quiz-form">
    <label>Topic ex. SQL Optimization : &lt;skill&gt; &lt;sub-skill&gt;
      <textarea name="technical_field" rows="2"></textarea>
    </label>
    <label>Enter the context of topic: ex. basic sql query optimization techniques
      <textarea name="quiz_content" rows="3"></textarea>
    </label>
    <label>Enter the number of questions
      <input type="number" name="number_of_questions" min="1" max="5" value="1" required>
    </label>
    <label>Select quiz type:
      <select name="quiz_type">
        <option>Multi-Choice</option>
        <option>True-False</option>
        <option>Open-Ended</option>
      </select>
    </label>
    <p><button type="submit">Generate Quiz</button></p>
  </form>
  <pre id="result"></pre>
  <script>
    const form = document.getElementById("quiz-form");
    const result = document.getElementById("result");
    form.addEventListener("submit", async (event) => {
      event.preventDefault();
      const data = new FormData(form);
      const payload = {
        technical_field: data.get("technical_field"),
        quiz_content: data.get("quiz_content"),
        number_of_questions: parseInt(data.get("number_of_questions"), 10),
        quiz_type: data.get("quiz_type"),
      };
      result.className = "";
      result.textContent = "Generating...";
      const response = await fetch("/api/quiz/generate", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify(payload),
      });
      const body = await response.json();
      if (!response.ok) {
        result.className = "error";
        result.textContent = body.error;
        return;
      }
      result.textContent = JSON.stringify(body.quiz, null, 2);
    });
  </script>
</body>
</html>
"#;
