pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Battery Memo</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef6ef;
      --bg-2: #cde8d4;
      --ink: #23302a;
      --accent: #2e9e5b;
      --accent-low: #d64545;
      --accent-high: #2f6fb3;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(35, 72, 48, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e4f2e2 60%, #f2f8ee 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 10px;
      font-size: 1.15rem;
    }

    .subtitle {
      margin: 0;
      color: #55645b;
      font-size: 1rem;
    }

    .panel {
      background: rgba(255, 255, 255, 0.7);
      border-radius: 20px;
      padding: 22px;
      box-shadow: inset 0 0 0 1px rgba(46, 158, 91, 0.12);
    }

    .identity-row {
      display: flex;
      gap: 12px;
      flex-wrap: wrap;
    }

    input[type="text"],
    input[type="date"],
    textarea {
      font: inherit;
      color: inherit;
      border: 1px solid rgba(35, 48, 42, 0.2);
      border-radius: 12px;
      padding: 10px 14px;
      background: #fff;
    }

    input[type="text"] {
      flex: 1;
      min-width: 220px;
    }

    textarea {
      width: 100%;
      min-height: 80px;
      resize: vertical;
    }

    .slider-row {
      display: flex;
      align-items: center;
      gap: 16px;
      margin: 12px 0;
    }

    input[type="range"] {
      flex: 1;
      accent-color: var(--accent);
    }

    .slider-value {
      font-family: "Fraunces", "Georgia", serif;
      font-size: 1.8rem;
      min-width: 3ch;
      text-align: right;
    }

    button {
      font: inherit;
      font-weight: 600;
      border: none;
      border-radius: 14px;
      padding: 11px 20px;
      cursor: pointer;
      background: var(--accent);
      color: #fff;
      transition: transform 120ms ease, filter 120ms ease;
    }

    button:hover {
      transform: translateY(-1px);
      filter: brightness(1.05);
    }

    button.ghost {
      background: transparent;
      color: var(--ink);
      box-shadow: inset 0 0 0 1px rgba(35, 48, 42, 0.25);
      padding: 7px 14px;
    }

    button.danger {
      background: var(--accent-low);
      padding: 7px 14px;
    }

    .hidden {
      display: none;
    }

    .history-list {
      display: grid;
      gap: 10px;
      margin: 0;
      padding: 0;
      list-style: none;
      max-height: 340px;
      overflow-y: auto;
    }

    .history-item {
      display: flex;
      align-items: center;
      gap: 14px;
      background: #fff;
      border-radius: 14px;
      padding: 12px 16px;
      box-shadow: 0 4px 14px rgba(35, 72, 48, 0.08);
    }

    .history-date {
      font-weight: 600;
      min-width: 7.5em;
    }

    .history-battery {
      font-family: "Fraunces", "Georgia", serif;
      font-size: 1.2rem;
      min-width: 3.2em;
      color: var(--accent);
    }

    .history-note {
      flex: 1;
      color: #55645b;
      overflow: hidden;
      text-overflow: ellipsis;
      white-space: nowrap;
    }

    .chart-header {
      display: flex;
      justify-content: space-between;
      align-items: flex-end;
      gap: 12px;
      flex-wrap: wrap;
      margin-bottom: 14px;
    }

    .tabs {
      display: flex;
      gap: 8px;
    }

    .tab {
      background: transparent;
      color: var(--ink);
      box-shadow: inset 0 0 0 1px rgba(35, 48, 42, 0.25);
      padding: 7px 14px;
      font-weight: 500;
    }

    .tab.active {
      background: var(--accent);
      color: #fff;
      box-shadow: none;
    }

    svg#chart {
      width: 100%;
      height: auto;
      display: block;
    }

    .chart-label {
      font-size: 12px;
      fill: #55645b;
    }

    .chart-metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 12px;
      margin-top: 14px;
    }

    .stat {
      background: #fff;
      border-radius: 14px;
      padding: 12px 16px;
      display: flex;
      flex-direction: column;
      gap: 2px;
    }

    .stat .label {
      font-size: 0.82rem;
      color: #55645b;
    }

    .stat .value {
      font-family: "Fraunces", "Georgia", serif;
      font-size: 1.5rem;
    }

    .status {
      min-height: 1.3em;
      font-size: 0.92rem;
    }

    .status[data-type="error"] {
      color: var(--accent-low);
    }

    .status[data-type="ok"] {
      color: var(--accent);
    }

    .hint {
      margin: 0;
      color: #6a786f;
      font-size: 0.85rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(14px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Battery Memo</h1>
      <p class="subtitle">Log today's energy (0-100) with a note, and watch the trend.</p>
    </header>

    <section class="panel" id="identity-panel">
      <h2>Who are you?</h2>
      <div class="identity-row">
        <input type="text" id="identity" maxlength="30" placeholder="Nickname (8+ characters, no real names)" />
        <button id="open-log" type="button">Open my log</button>
      </div>
      <p class="hint">The nickname only selects which log file to open. It is not a password.</p>
    </section>

    <section class="panel hidden" id="editor-panel">
      <h2 id="editor-title">Today's record</h2>
      <label for="entry-date" class="hint">Date</label>
      <div class="identity-row">
        <input type="date" id="entry-date" />
        <button class="ghost" id="reset-today" type="button">Back to today</button>
      </div>
      <div class="slider-row">
        <input type="range" id="battery" min="0" max="100" value="50" />
        <span class="slider-value" id="battery-value">50</span>
      </div>
      <textarea id="note" placeholder="Note (free text, optional)"></textarea>
      <div class="identity-row" style="margin-top: 12px;">
        <button id="save" type="button">Save</button>
      </div>
    </section>

    <section class="panel hidden" id="chart-panel">
      <div class="chart-header">
        <div>
          <h2 id="chart-title">Battery trend</h2>
          <p id="chart-subtitle" class="subtitle">Lowest day in red, highest in blue.</p>
        </div>
        <div class="tabs" role="tablist">
          <button class="tab active" type="button" data-tab="trend" role="tab" aria-selected="true">Trend</button>
          <button class="tab" type="button" data-tab="weekly" role="tab" aria-selected="false">Weekly average</button>
          <button class="tab" type="button" data-tab="monthly" role="tab" aria-selected="false">Monthly average</button>
        </div>
      </div>
      <svg id="chart" viewBox="0 0 600 260" aria-label="Battery chart" role="img"></svg>
      <div class="chart-metrics">
        <div class="stat">
          <span class="label">Entries</span>
          <span class="value" id="metric-count">0</span>
        </div>
        <div class="stat">
          <span class="label" id="metric-min-label">Lowest</span>
          <span class="value" id="metric-min">--</span>
        </div>
        <div class="stat">
          <span class="label" id="metric-max-label">Highest</span>
          <span class="value" id="metric-max">--</span>
        </div>
      </div>
    </section>

    <section class="panel hidden" id="history-panel">
      <h2>History</h2>
      <ul class="history-list" id="history"></ul>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">One record per calendar day; saving the same day again replaces it.</p>
  </main>

  <script>
    const identityInput = document.getElementById('identity');
    const openLogBtn = document.getElementById('open-log');
    const editorPanel = document.getElementById('editor-panel');
    const editorTitle = document.getElementById('editor-title');
    const chartPanel = document.getElementById('chart-panel');
    const historyPanel = document.getElementById('history-panel');
    const dateInput = document.getElementById('entry-date');
    const resetTodayBtn = document.getElementById('reset-today');
    const batteryInput = document.getElementById('battery');
    const batteryValueEl = document.getElementById('battery-value');
    const noteInput = document.getElementById('note');
    const saveBtn = document.getElementById('save');
    const historyEl = document.getElementById('history');
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const chartTitleEl = document.getElementById('chart-title');
    const chartSubtitleEl = document.getElementById('chart-subtitle');
    const metricCount = document.getElementById('metric-count');
    const metricMin = document.getElementById('metric-min');
    const metricMax = document.getElementById('metric-max');
    const metricMinLabel = document.getElementById('metric-min-label');
    const metricMaxLabel = document.getElementById('metric-max-label');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    const SVG_NS = 'http://www.w3.org/2000/svg';
    let identity = '';
    let entries = [];
    let statsData = null;
    let activeTab = 'trend';

    const todayString = () => {
      const now = new Date();
      const month = String(now.getMonth() + 1).padStart(2, '0');
      const day = String(now.getDate()).padStart(2, '0');
      return now.getFullYear() + '-' + month + '-' + day;
    };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const apiBase = () => '/api/users/' + encodeURIComponent(identity);

    const request = async (path, options) => {
      const res = await fetch(apiBase() + path, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res;
    };

    const el = (tag, attrs) => {
      const node = document.createElementNS(SVG_NS, tag);
      Object.entries(attrs).forEach(([key, value]) => node.setAttribute(key, value));
      return node;
    };

    const clearChart = () => {
      while (chartEl.firstChild) {
        chartEl.removeChild(chartEl.firstChild);
      }
    };

    const emptyChart = (message) => {
      clearChart();
      const label = el('text', { class: 'chart-label', x: 300, y: 134, 'text-anchor': 'middle' });
      label.textContent = message;
      chartEl.appendChild(label);
    };

    const chartFrame = () => {
      const width = 600;
      const height = 260;
      const left = 40;
      const right = width - 16;
      const top = 20;
      const bottom = height - 34;
      // Fixed 0-100 scale: battery is bounded, so the axis never jumps around.
      const y = (value) => bottom - ((value / 100) * (bottom - top));
      [0, 50, 100].forEach((tick) => {
        chartEl.appendChild(el('line', {
          x1: left, x2: right, y1: y(tick), y2: y(tick),
          stroke: 'rgba(35, 48, 42, 0.12)', 'stroke-width': 1
        }));
        const label = el('text', { class: 'chart-label', x: left - 8, y: y(tick) + 4, 'text-anchor': 'end' });
        label.textContent = tick;
        chartEl.appendChild(label);
      });
      return { left, right, top, bottom, y };
    };

    const xLabel = (text, x, y) => {
      const label = el('text', { class: 'chart-label', x, y, 'text-anchor': 'middle' });
      label.textContent = text;
      chartEl.appendChild(label);
    };

    const renderTrend = () => {
      chartTitleEl.textContent = 'Battery trend';
      chartSubtitleEl.textContent = 'Lowest day in red, highest in blue.';
      metricMinLabel.textContent = 'Lowest';
      metricMaxLabel.textContent = 'Highest';
      if (entries.length < 2) {
        emptyChart('At least two records are needed for the trend.');
        return;
      }
      clearChart();
      const frame = chartFrame();
      const span = frame.right - frame.left;
      const step = span / (entries.length - 1);
      const x = (i) => frame.left + i * step;

      const path = entries
        .map((entry, i) => (i === 0 ? 'M' : 'L') + x(i) + ' ' + frame.y(entry.value))
        .join(' ');
      chartEl.appendChild(el('path', {
        d: path, fill: 'none', stroke: '#2e9e5b', 'stroke-width': 2.5,
        'stroke-linejoin': 'round', 'stroke-linecap': 'round'
      }));

      const minmax = statsData && statsData.minmax;
      entries.forEach((entry, i) => {
        let fill = '#2e9e5b';
        if (minmax && entry.date === minmax.min_date) {
          fill = '#d64545';
        } else if (minmax && entry.date === minmax.max_date) {
          fill = '#2f6fb3';
        }
        chartEl.appendChild(el('circle', { cx: x(i), cy: frame.y(entry.value), r: 4, fill }));
      });

      xLabel(entries[0].date, frame.left + 30, 250);
      xLabel(entries[entries.length - 1].date, frame.right - 30, 250);
    };

    const renderBars = (points, title, subtitle) => {
      chartTitleEl.textContent = title;
      chartSubtitleEl.textContent = subtitle;
      metricMinLabel.textContent = 'First bucket';
      metricMaxLabel.textContent = 'Last bucket';
      if (!points.length) {
        emptyChart('No records yet.');
        return;
      }
      clearChart();
      const frame = chartFrame();
      const span = frame.right - frame.left;
      const slot = span / points.length;
      const barWidth = Math.min(46, slot * 0.6);

      points.forEach((point, i) => {
        const cx = frame.left + slot * i + slot / 2;
        const barTop = frame.y(point.mean);
        chartEl.appendChild(el('rect', {
          x: cx - barWidth / 2, y: barTop,
          width: barWidth, height: frame.bottom - barTop,
          rx: 6, fill: '#2e9e5b', opacity: 0.85
        }));
        xLabel(point.label, cx, 250);
        const value = el('text', { class: 'chart-label', x: cx, y: barTop - 6, 'text-anchor': 'middle' });
        value.textContent = point.mean.toFixed(1);
        chartEl.appendChild(value);
      });
    };

    const renderMetrics = () => {
      metricCount.textContent = entries.length;
      const minmax = statsData && statsData.minmax;
      if (activeTab === 'trend') {
        metricMin.textContent = minmax ? minmax.min_value + ' (' + minmax.min_date + ')' : '--';
        metricMax.textContent = minmax ? minmax.max_value + ' (' + minmax.max_date + ')' : '--';
        return;
      }
      const points = activeTab === 'weekly' ? statsData.weekly : statsData.monthly;
      const first = points[0];
      const last = points[points.length - 1];
      metricMin.textContent = first ? first.mean.toFixed(1) + ' (' + first.label + ')' : '--';
      metricMax.textContent = last ? last.mean.toFixed(1) + ' (' + last.label + ')' : '--';
    };

    const renderActiveTab = () => {
      if (!statsData) {
        return;
      }
      if (activeTab === 'weekly') {
        renderBars(statsData.weekly, 'Weekly average', 'Mean battery per ISO week.');
      } else if (activeTab === 'monthly') {
        renderBars(statsData.monthly, 'Monthly average', 'Mean battery per calendar month.');
      } else {
        renderTrend();
      }
      renderMetrics();
    };

    const setActiveTab = (tab) => {
      activeTab = tab;
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      renderActiveTab();
    };

    const renderHistory = () => {
      historyEl.textContent = '';
      const descending = [...entries].reverse();
      descending.forEach((entry) => {
        const item = document.createElement('li');
        item.className = 'history-item';

        const date = document.createElement('span');
        date.className = 'history-date';
        date.textContent = entry.date;

        const battery = document.createElement('span');
        battery.className = 'history-battery';
        battery.textContent = entry.value;

        const note = document.createElement('span');
        note.className = 'history-note';
        note.textContent = entry.note;

        const edit = document.createElement('button');
        edit.className = 'ghost';
        edit.type = 'button';
        edit.textContent = 'Edit';
        edit.addEventListener('click', () => loadIntoEditor(entry));

        const remove = document.createElement('button');
        remove.className = 'danger';
        remove.type = 'button';
        remove.textContent = 'Delete';
        remove.addEventListener('click', () => {
          deleteEntry(entry.date).catch((err) => setStatus(err.message, 'error'));
        });

        item.append(date, battery, note, edit, remove);
        historyEl.appendChild(item);
      });
    };

    const syncEditorTitle = () => {
      editorTitle.textContent = dateInput.value === todayString()
        ? "Today's record"
        : 'Record for ' + dateInput.value;
    };

    const loadIntoEditor = (entry) => {
      dateInput.value = entry.date;
      batteryInput.value = entry.value;
      batteryValueEl.textContent = entry.value;
      noteInput.value = entry.note;
      syncEditorTitle();
      editorPanel.scrollIntoView({ behavior: 'smooth' });
    };

    const refresh = async () => {
      const [entriesRes, statsRes] = await Promise.all([
        request('/entries'),
        request('/stats')
      ]);
      entries = (await entriesRes.json()).entries;
      statsData = await statsRes.json();

      const existing = entries.find((entry) => entry.date === dateInput.value);
      if (existing) {
        batteryInput.value = existing.value;
        batteryValueEl.textContent = existing.value;
        noteInput.value = existing.note;
      }

      renderHistory();
      renderActiveTab();
    };

    const saveEntry = async () => {
      setStatus('Saving...', 'info');
      const res = await request('/entries', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          date: dateInput.value,
          value: Number(batteryInput.value),
          note: noteInput.value
        })
      });
      const saved = await res.json();
      await refresh();
      setStatus('Saved ' + saved.date + '.', 'ok');
      setTimeout(() => setStatus('', ''), 1500);
    };

    const deleteEntry = async (date) => {
      await request('/entries/' + date, { method: 'DELETE' });
      await refresh();
      setStatus('Deleted ' + date + '.', 'ok');
      setTimeout(() => setStatus('', ''), 1500);
    };

    const openLog = async () => {
      const nickname = identityInput.value.trim();
      if (nickname.length < 8) {
        setStatus('Nickname must be at least 8 characters. Please avoid real names.', 'error');
        return;
      }
      identity = nickname;
      dateInput.value = todayString();
      syncEditorTitle();
      await refresh();
      editorPanel.classList.remove('hidden');
      chartPanel.classList.remove('hidden');
      historyPanel.classList.remove('hidden');
      setStatus('Log opened for ' + nickname + '.', 'ok');
      setTimeout(() => setStatus('', ''), 1500);
    };

    batteryInput.addEventListener('input', () => {
      batteryValueEl.textContent = batteryInput.value;
    });

    dateInput.addEventListener('change', () => {
      syncEditorTitle();
      const existing = entries.find((entry) => entry.date === dateInput.value);
      if (existing) {
        loadIntoEditor(existing);
      }
    });

    resetTodayBtn.addEventListener('click', () => {
      dateInput.value = todayString();
      syncEditorTitle();
    });

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    openLogBtn.addEventListener('click', () => {
      openLog().catch((err) => setStatus(err.message, 'error'));
    });

    identityInput.addEventListener('keydown', (event) => {
      if (event.key === 'Enter') {
        openLog().catch((err) => setStatus(err.message, 'error'));
      }
    });

    saveBtn.addEventListener('click', () => {
      saveEntry().catch((err) => setStatus(err.message, 'error'));
    });
  </script>
</body>
</html>
"#;
