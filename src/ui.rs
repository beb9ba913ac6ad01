pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Caring for a loved one with hypothyroidism</title>
  <style>
    :root {
      --primary: #0ea5e9;
      --primary-dark: #0284c7;
      --soft: #d3e4fd;
      --ink: #1f2937;
      --muted: #6b7280;
      --card: #ffffff;
      --danger: #dc2626;
      --ok: #16a34a;
      --shadow: 0 12px 32px rgba(2, 132, 199, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      font-family: "Inter", "Segoe UI", Arial, sans-serif;
      color: var(--ink);
      background: linear-gradient(180deg, #f0f9ff, #ffffff 40%);
      line-height: 1.6;
    }

    nav {
      position: sticky;
      top: 0;
      z-index: 10;
      background: rgba(255, 255, 255, 0.92);
      backdrop-filter: blur(8px);
      border-bottom: 1px solid #e5e7eb;
    }

    nav .inner {
      max-width: 1040px;
      margin: 0 auto;
      padding: 12px 20px;
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    nav .brand {
      font-weight: 700;
      color: var(--primary-dark);
    }

    nav a {
      color: var(--muted);
      text-decoration: none;
      margin-left: 18px;
      font-size: 0.95rem;
    }

    nav a:hover {
      color: var(--primary);
    }

    section {
      max-width: 1040px;
      margin: 0 auto;
      padding: 56px 20px;
    }

    h1 {
      font-size: clamp(2rem, 5vw, 3rem);
      margin: 0 0 12px;
    }

    h2 {
      font-size: 2rem;
      margin: 0 0 8px;
      text-align: center;
    }

    .lead {
      text-align: center;
      color: var(--muted);
      margin: 0 0 32px;
    }

    .hero {
      text-align: center;
      padding-top: 72px;
    }

    .hero .eyebrow {
      display: inline-block;
      background: var(--soft);
      color: var(--primary-dark);
      padding: 4px 14px;
      border-radius: 999px;
      font-size: 0.85rem;
      margin-bottom: 16px;
    }

    .hero p {
      max-width: 640px;
      margin: 0 auto 28px;
      color: var(--muted);
      font-size: 1.1rem;
    }

    .button {
      display: inline-block;
      border: none;
      border-radius: 10px;
      padding: 12px 22px;
      font-size: 1rem;
      cursor: pointer;
      text-decoration: none;
      background: var(--primary);
      color: white;
      margin: 4px;
    }

    .button.outline {
      background: white;
      color: var(--primary-dark);
      border: 1px solid var(--primary);
    }

    .button:disabled {
      opacity: 0.6;
      cursor: progress;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 18px;
    }

    .card {
      background: var(--card);
      border-radius: 16px;
      padding: 22px;
      box-shadow: var(--shadow);
    }

    .card h3 {
      margin: 0 0 8px;
      color: var(--primary-dark);
    }

    .card p {
      margin: 0;
      color: var(--muted);
    }

    details {
      background: var(--card);
      border-radius: 14px;
      box-shadow: var(--shadow);
      padding: 16px 20px;
      margin-bottom: 12px;
    }

    summary {
      font-weight: 600;
      cursor: pointer;
    }

    details p,
    details ul {
      color: var(--muted);
    }

    .warning {
      color: var(--danger);
      font-weight: 600;
    }

    .callout {
      background: var(--soft);
      border-radius: 16px;
      padding: 20px 24px;
      margin-top: 24px;
    }

    .callout h3 {
      margin: 0 0 6px;
    }

    .checklist {
      max-width: 640px;
      margin: 0 auto;
    }

    .progress-row {
      display: flex;
      justify-content: space-between;
      font-size: 0.95rem;
      color: var(--muted);
      margin-bottom: 6px;
    }

    .track {
      height: 10px;
      background: var(--soft);
      border-radius: 999px;
      overflow: hidden;
    }

    .track .fill {
      height: 100%;
      background: var(--primary);
      width: 0;
      transition: width 200ms ease;
    }

    .item {
      display: flex;
      align-items: center;
      gap: 12px;
      padding: 12px 4px;
      border-bottom: 1px solid #f3f4f6;
      cursor: pointer;
    }

    .item input {
      width: 20px;
      height: 20px;
      accent-color: var(--primary);
    }

    .item.done span {
      color: var(--muted);
      text-decoration: line-through;
    }

    .new-day {
      display: none;
      background: #fef3c7;
      border-radius: 10px;
      padding: 10px 14px;
      margin: 12px 0;
      font-size: 0.95rem;
    }

    .history-row {
      display: grid;
      grid-template-columns: 110px 1fr 60px;
      align-items: center;
      gap: 12px;
      padding: 6px 0;
    }

    .chart {
      display: flex;
      align-items: flex-end;
      gap: 12px;
      height: 180px;
      padding: 12px 4px 0;
    }

    .bar {
      flex: 1;
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: flex-end;
      height: 100%;
      font-size: 0.8rem;
      color: var(--muted);
    }

    .bar .column {
      width: 100%;
      background: linear-gradient(180deg, var(--primary), var(--primary-dark));
      border-radius: 8px 8px 0 0;
      min-height: 2px;
    }

    .export-actions {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      margin-top: 18px;
    }

    dialog {
      border: none;
      border-radius: 16px;
      padding: 24px;
      box-shadow: var(--shadow);
      width: min(420px, 92vw);
    }

    dialog input {
      width: 100%;
      padding: 10px 12px;
      border-radius: 10px;
      border: 1px solid #d1d5db;
      font-size: 1rem;
      margin: 12px 0;
    }

    .status {
      min-height: 1.4em;
      font-size: 0.95rem;
      margin-top: 10px;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: var(--ok);
    }

    footer {
      background: var(--primary-dark);
      color: white;
      text-align: center;
      padding: 40px 20px;
    }

    footer p {
      max-width: 640px;
      margin: 8px auto 0;
      opacity: 0.9;
    }
  </style>
</head>
<body>
  <nav>
    <div class="inner">
      <span class="brand">Caring for loved ones</span>
      <div>
        <a href="#hero">Home</a>
        <a href="#about">About the condition</a>
        <a href="#tips">Tips</a>
        <a href="#checklist">Checklist</a>
      </div>
    </div>
  </nav>

  <section class="hero" id="hero">
    <span class="eyebrow">A guide for relatives</span>
    <h1>Your help is priceless</h1>
    <p>Hypothyroidism is not laziness or a bad temper. It is an illness that causes tiredness,
      forgetfulness and low mood. Here is how you can help someone close to you.</p>
    <a class="button" href="#checklist">Open the checklist</a>
    <a class="button outline" href="#tips">Read the tips</a>
  </section>

  <section id="about">
    <h2>What is hypothyroidism?</h2>
    <p class="lead">Understanding the illness is the first step towards the right support</p>
    <div class="grid">
      <div class="card">
        <h3>Cause</h3>
        <p>The thyroid gland makes too little hormone, which slows the metabolism and affects
          every system in the body.</p>
      </div>
      <div class="card">
        <h3>Main symptoms</h3>
        <p>Constant tiredness, sleepiness, feeling cold, swelling, weight gain, forgetfulness
          and low mood.</p>
      </div>
      <div class="card">
        <h3>Treatment</h3>
        <p>A hormone tablet taken every morning on an empty stomach. With the right treatment
          symptoms go away and life returns to normal.</p>
      </div>
      <div class="card">
        <h3>Outlook</h3>
        <p>With regular medication and blood tests the outlook is excellent. People live full
          lives without restrictions.</p>
      </div>
    </div>
  </section>

  <section id="tips">
    <h2>What you can do</h2>
    <p class="lead">Six practical ways to help someone close to you</p>
    <details open>
      <summary>1. Be the alarm clock</summary>
      <p>Gently remind them to take the morning tablet. Set a shared phone reminder or use the
        checklist on this page.</p>
    </details>
    <details>
      <summary>2. Help with the diet</summary>
      <p>Cook healthy meals with vegetables and fibre together. Avoid temptation and don't buy
        too many sweets and pastries.</p>
    </details>
    <details>
      <summary>3. Be patient</summary>
      <p>Don't say "pull yourself together". Offer help around the house or a calm walk
        instead. Understanding matters more than lectures.</p>
    </details>
    <details>
      <summary>4. Watch for warning signs</summary>
      <p>You may notice dangerous symptoms before the patient does:</p>
      <ul>
        <li>Severe sluggishness, unusual sleepiness, slurred speech</li>
        <li>Increasing swelling of the face</li>
        <li>Complaints of feeling very cold</li>
      </ul>
      <p class="warning">If you see these symptoms, see a doctor immediately!</p>
    </details>
    <details>
      <summary>5. Support doctor visits</summary>
      <p>Help book appointments and go along to blood tests. Company at the appointment lowers
        stress and helps remember the doctor's advice.</p>
    </details>
    <details>
      <summary>6. Praise progress</summary>
      <p>Notice the good changes: less swelling, more energy, a better mood. It is the best
        motivation to keep up the treatment!</p>
    </details>
    <div class="callout">
      <h3>Important to remember</h3>
      <p>Your support is half of the treatment's success. Patients whose families take part in
        treatment recover faster and follow their doctor's advice more closely.</p>
    </div>
  </section>

  <section id="checklist">
    <h2>Daily checklist</h2>
    <p class="lead">Tick it off every day to keep track of how things are going</p>
    <div class="checklist card">
      <div class="progress-row">
        <span>Done today (<span id="date">{{DATE}}</span>)</span>
        <span id="progress-label">0 / 0</span>
      </div>
      <div class="track"><div class="fill" id="progress-fill"></div></div>
      <div class="new-day" id="new-day">A new day has started. Resetting records the current ticks under today's date and clears the list.</div>
      <div id="items"></div>
      <button class="button" type="button" id="reset">Reset for a new day</button>
      <div class="status" id="status"></div>
    </div>
  </section>

  <section id="history" hidden>
    <h2>Last 7 days</h2>
    <div class="checklist card">
      <div id="history-rows"></div>
      <h3>Progress chart</h3>
      <div class="chart" id="chart"></div>
      <div class="export-actions">
        <a class="button outline" href="/api/export/pdf" download>Download PDF</a>
        <button class="button" type="button" id="open-email">Send by email</button>
      </div>
    </div>
  </section>

  <dialog id="email-dialog">
    <form id="email-form" method="dialog">
      <h3>Send the history by email</h3>
      <input type="email" id="email" placeholder="name@example.com" required />
      <div class="status" id="email-status"></div>
      <button class="button outline" type="button" id="close-email">Cancel</button>
      <button class="button" type="submit" id="send-email">Send</button>
    </form>
  </dialog>

  <footer>
    <h3>Your support is priceless</h3>
    <p>Remember: hypothyroidism is not a life sentence. With the right treatment and your
      support, your loved one will return to a full life.</p>
  </footer>

  <script>
    const itemsEl = document.getElementById('items');
    const progressLabel = document.getElementById('progress-label');
    const progressFill = document.getElementById('progress-fill');
    const newDayEl = document.getElementById('new-day');
    const dateEl = document.getElementById('date');
    const statusEl = document.getElementById('status');
    const historySection = document.getElementById('history');
    const historyRows = document.getElementById('history-rows');
    const chartEl = document.getElementById('chart');
    const dialog = document.getElementById('email-dialog');
    const emailInput = document.getElementById('email');
    const emailStatus = document.getElementById('email-status');
    const sendButton = document.getElementById('send-email');

    const setStatus = (el, message, type) => {
      el.textContent = message;
      el.dataset.type = type || '';
    };

    const errorMessage = async (res, fallback) => {
      try {
        const body = await res.json();
        return body.error || fallback;
      } catch (_) {
        return fallback;
      }
    };

    const renderChecklist = (view) => {
      dateEl.textContent = view.date;
      progressLabel.textContent = `${view.completed} / ${view.total}`;
      progressFill.style.width = `${view.percentage}%`;
      newDayEl.style.display = view.day_changed ? 'block' : 'none';
      itemsEl.innerHTML = '';
      view.items.forEach((item) => {
        const row = document.createElement('label');
        row.className = item.checked ? 'item done' : 'item';
        const box = document.createElement('input');
        box.type = 'checkbox';
        box.checked = item.checked;
        box.addEventListener('change', () => toggle(item.id));
        const text = document.createElement('span');
        text.textContent = item.label;
        row.append(box, text);
        itemsEl.append(row);
      });
    };

    const renderHistory = (view) => {
      historySection.hidden = view.records.length === 0;
      historyRows.innerHTML = '';
      chartEl.innerHTML = '';
      view.records.forEach((record) => {
        const row = document.createElement('div');
        row.className = 'history-row';
        const date = document.createElement('span');
        date.textContent = record.date;
        const track = document.createElement('div');
        track.className = 'track';
        const fill = document.createElement('div');
        fill.className = 'fill';
        fill.style.width = `${record.percentage}%`;
        track.append(fill);
        const count = document.createElement('span');
        count.textContent = `${record.completed}/${record.total}`;
        row.append(date, track, count);
        historyRows.append(row);

        const bar = document.createElement('div');
        bar.className = 'bar';
        const value = document.createElement('span');
        value.textContent = record.completed;
        const column = document.createElement('div');
        column.className = 'column';
        column.style.height = `${record.bar_height}%`;
        column.title = `${Math.round(record.percentage)}%`;
        const label = document.createElement('span');
        label.textContent = record.label;
        bar.append(value, column, label);
        chartEl.append(bar);
      });
    };

    const loadChecklist = async () => {
      const res = await fetch('/api/checklist');
      if (!res.ok) {
        throw new Error('Unable to load the checklist');
      }
      renderChecklist(await res.json());
    };

    const loadHistory = async () => {
      const res = await fetch('/api/history');
      if (!res.ok) {
        throw new Error('Unable to load the history');
      }
      renderHistory(await res.json());
    };

    const toggle = async (id) => {
      const res = await fetch('/api/checklist/toggle', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ id })
      });
      if (!res.ok) {
        setStatus(statusEl, await errorMessage(res, 'Could not save'), 'error');
        return;
      }
      renderChecklist(await res.json());
    };

    document.getElementById('reset').addEventListener('click', async () => {
      const res = await fetch('/api/checklist/reset', { method: 'POST' });
      if (!res.ok) {
        setStatus(statusEl, await errorMessage(res, 'Could not reset'), 'error');
        return;
      }
      const data = await res.json();
      renderChecklist(data.checklist);
      renderHistory(data.history);
      setStatus(statusEl, 'Saved to history', 'ok');
      setTimeout(() => setStatus(statusEl, '', ''), 1500);
    });

    document.getElementById('open-email').addEventListener('click', () => {
      setStatus(emailStatus, '', '');
      dialog.showModal();
    });

    document.getElementById('close-email').addEventListener('click', () => dialog.close());

    document.getElementById('email-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const email = emailInput.value.trim();
      if (!email.includes('@')) {
        setStatus(emailStatus, 'Enter a valid email address', 'error');
        return;
      }
      sendButton.disabled = true;
      sendButton.textContent = 'Sending...';
      setStatus(emailStatus, '', '');
      try {
        const res = await fetch('/api/export/email', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ email })
        });
        if (!res.ok) {
          setStatus(emailStatus, await errorMessage(res, 'Could not send the email. Try again.'), 'error');
          return;
        }
        const body = await res.json();
        setStatus(statusEl, body.message, 'ok');
        emailInput.value = '';
        dialog.close();
      } catch (_) {
        setStatus(emailStatus, 'Could not send the email. Check your connection and try again.', 'error');
      } finally {
        sendButton.disabled = false;
        sendButton.textContent = 'Send';
      }
    });

    Promise.all([loadChecklist(), loadHistory()])
      .catch((err) => setStatus(statusEl, err.message, 'error'));
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_shows_the_date_and_sections() {
        let html = render_index("01.06.2024");
        assert!(html.contains("<span id=\"date\">01.06.2024</span>"));
        assert!(!html.contains("{{DATE}}"));
        for anchor in ["id=\"hero\"", "id=\"about\"", "id=\"tips\"", "id=\"checklist\""] {
            assert!(html.contains(anchor), "missing {anchor}");
        }
    }

    #[test]
    fn new_day_hint_names_the_date_a_reset_records() {
        let html = render_index("02.06.2024");
        let start = html.find("id=\"new-day\"").unwrap();
        let hint = &html[start..start + html[start..].find("</div>").unwrap()];
        assert!(hint.contains("under today's date"));
        assert!(!hint.contains("yesterday"));
    }
}
